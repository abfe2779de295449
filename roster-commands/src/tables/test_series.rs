use std::sync::Arc;

use crate::CommandMeta;
use roster_core::Context;
use roster_core::models::TestSeriesRecord;
use roster_core::views::TableHandle;

use super::{ListingTable, TableInfo, TableRow};

pub const META: CommandMeta = CommandMeta {
    name: "tests",
    desc: "Show the test series management table.",
    category: "tables",
    usage: "!tests [page]",
};

/// Test series listing.
pub struct TestSeriesTable;

impl ListingTable for TestSeriesTable {
    type Row = TestSeriesRecord;

    const INFO: TableInfo = TableInfo {
        name: "tests",
        title: "Test Series Management",
        subtitle: "Performance overview of every test series",
        noun: "test series",
        empty_message: "No test series data available.",
    };

    fn handle(ctx: &Context) -> &Arc<TableHandle<TestSeriesRecord>> {
        &ctx.test_series
    }
}

impl TableRow for TestSeriesRecord {
    const HEADERS: &'static [&'static str] = &[
        "Title",
        "Test Type",
        "Students",
        "Avg Score",
        "Difficulty",
        "Start Date",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{}\n#{}", self.title, self.serial_number),
            self.test_type.clone(),
            self.students_enrolled.to_string(),
            self.average_score.to_string(),
            self.difficulty_level.clone(),
            self.start_date.clone(),
        ]
    }
}
