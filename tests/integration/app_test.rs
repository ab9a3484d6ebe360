//! Application loop over scripted input.

use repl_router::app::{App, Outcome};
use repl_router::commands::{Command, Flag, ResponseStatus, Router};
use repl_router::config::AppConfig;
use regex::Regex;
use serde_json::json;

fn counter_router() -> Router {
    let mut router = Router::with_title("Counter");
    router
        .route(
            Command::new("add")
                .with_flag(Flag::new("by").with_pattern(Regex::new(r"^\d+$").unwrap())),
            |response| {
                if response.status != ResponseStatus::AllValid {
                    return;
                }
                let by = response
                    .input_flags
                    .get_by_name("by")
                    .and_then(|f| f.value())
                    .and_then(|v| v.parse::<i64>().ok())
                    .unwrap_or(1);
                let current = response
                    .data
                    .get("count")
                    .and_then(|v| v.as_i64())
                    .unwrap_or(0);
                response.data.insert("count", current + by);
            },
        )
        .unwrap();
    router
}

#[test]
fn test_scripted_session() {
    let config = AppConfig {
        print_help_on_start: false,
        prompt: String::new(),
        ..AppConfig::default()
    };
    let mut app = App::builder(config)
        .router(counter_router())
        .build()
        .unwrap();

    let script = "add\nadd --by 5\nadd --by five\nad\nQ\n";
    let mut output = Vec::new();
    app.run(script.as_bytes(), &mut output).unwrap();

    assert_eq!(app.data().get("count"), Some(&json!(6)));
    let output = String::from_utf8(output).unwrap();
    assert_eq!(
        output,
        "Unknown command: ad. Did you mean \"add\"?\nSee you!\n"
    );
}

#[test]
fn test_custom_exit_command() {
    let config = AppConfig {
        exit_trigger: "exit".to_string(),
        exit_aliases: vec!["bye".to_string()],
        ..AppConfig::default()
    };
    let mut app = App::builder(config)
        .router(counter_router())
        .build()
        .unwrap();

    assert_eq!(app.process_line("bye").unwrap(), Outcome::Exit);
    assert!(matches!(
        app.process_line("Q").unwrap(),
        Outcome::UnknownCommand { suggestion: None, .. }
    ));
    assert!(app.help_text().contains("exit, bye"));
}
