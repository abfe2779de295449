use std::sync::Arc;

use crate::CommandMeta;
use roster_core::Context;
use roster_core::models::UserRecord;
use roster_core::views::TableHandle;

use super::{ListingTable, TableInfo, TableRow};

pub const META: CommandMeta = CommandMeta {
    name: "users",
    desc: "Show the user analytics table.",
    category: "tables",
    usage: "!users [page]",
};

/// User analytics listing.
pub struct UsersTable;

impl ListingTable for UsersTable {
    type Row = UserRecord;

    const INFO: TableInfo = TableInfo {
        name: "users",
        title: "User Analytics",
        subtitle: "Comprehensive user data analytics",
        noun: "users",
        empty_message: "No user data available.",
    };

    fn handle(ctx: &Context) -> &Arc<TableHandle<UserRecord>> {
        &ctx.users
    }
}

impl TableRow for UserRecord {
    const HEADERS: &'static [&'static str] = &[
        "User Details",
        "Grand Tests Taken",
        "Avg Score",
        "Signup Date",
        "Last Login",
        "Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{}\n{}", self.user_name, self.email),
            self.tests_completed.to_string(),
            format!("{}%", self.avg_score),
            self.join_date.clone(),
            self.last_login.clone(),
            self.status.clone(),
        ]
    }
}
