//! Plain-text command listing built from registered routers.

use super::command::Command;
use super::flag::{Flag, PossibleValues};
use super::router::Router;

/// Renders every router's commands, grouped under the router title.
pub fn render<'a>(routers: impl IntoIterator<Item = &'a Router>) -> String {
    routers
        .into_iter()
        .filter_map(|router| {
            let lines = router
                .commands()
                .map(command_line)
                .collect::<Vec<_>>()
                .join("");

            if lines.is_empty() {
                return None;
            }

            let title = router.title().unwrap_or("Commands");
            Some(format!("{title}:\n{lines}"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn command_line(command: &Command) -> String {
    let names = std::iter::once(command.trigger())
        .chain(command.aliases().iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(", ");

    let flags = command
        .flags()
        .iter()
        .map(flag_usage)
        .collect::<Vec<_>>();

    if flags.is_empty() {
        format!("  {names:<16} - {}\n", command.description())
    } else {
        format!(
            "  {names:<16} - {} [{}]\n",
            command.description(),
            flags.join(" ")
        )
    }
}

/// `--env <dev|prod>` for value lists, `--host <value>` for patterns.
fn flag_usage(flag: &Flag) -> String {
    match flag.possible_values() {
        PossibleValues::Values(values) => {
            let values = values.iter().map(String::as_str).collect::<Vec<_>>();
            format!("{flag} <{}>", values.join("|"))
        }
        PossibleValues::Pattern(_) => format!("{flag} <value>"),
        PossibleValues::Neither | PossibleValues::All => flag.to_string(),
    }
}
