use crate::{COMMANDS, CommandMeta, Reply};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "!usage <command>",
};

/// Show usage for a specific command.
///
/// Error behavior:
/// - missing argument returns this command's usage.
/// - unknown command returns a short not-found message.
pub fn run(arg1: Option<&str>) -> Reply {
    let Some(raw_name) = arg1 else {
        return Reply::Text(format!("Usage: `{}`", META.usage));
    };

    let lookup = raw_name.trim().trim_start_matches('!').to_ascii_lowercase();

    let Some(command) = COMMANDS.iter().find(|command| command.name == lookup) else {
        return Reply::Text(format!("Unknown command: `{}`", lookup));
    };

    Reply::Text(format!("Usage: `{}`", command.usage))
}
