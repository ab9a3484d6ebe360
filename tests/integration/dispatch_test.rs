//! Parse, route and validate through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use repl_router::commands::{
    defaults, parse, suggest, validate_routers, Command, DataBridge, Flag, InputFlag, Prefix,
    ResponseStatus, Router, ValidationStatus,
};
use repl_router::error::{ParseError, RegistrationError};

#[derive(Debug, Clone, PartialEq)]
struct Seen {
    status: ResponseStatus,
    flags: Vec<(String, Option<ValidationStatus>)>,
}

fn recording_router() -> (Router, Rc<RefCell<Vec<Seen>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);

    let mut router = Router::with_title("Deploy");
    router
        .route(
            Command::new("deploy")
                .with_aliases(["d"])
                .with_flag(Flag::new("env").with_values(["dev", "prod"]))
                .with_flag(Flag::new("force").toggle())
                .with_flag(defaults::short_port()),
            move |response| {
                log.borrow_mut().push(Seen {
                    status: response.status,
                    flags: response
                        .input_flags
                        .iter()
                        .map(|f| (f.string_entity(), f.status))
                        .collect(),
                });
            },
        )
        .unwrap();

    (router, seen)
}

#[test]
fn test_deploy_all_valid() {
    let (router, seen) = recording_router();
    let input = parse("deploy --env prod --force").unwrap();
    assert_eq!(router.dispatch(&input, &mut DataBridge::new()), 1);

    assert_eq!(
        seen.borrow()[0],
        Seen {
            status: ResponseStatus::AllValid,
            flags: vec![
                ("--env".to_string(), Some(ValidationStatus::Valid)),
                ("--force".to_string(), Some(ValidationStatus::Valid)),
            ],
        }
    );
}

#[test]
fn test_alias_with_mixed_verdicts() {
    let (router, seen) = recording_router();
    let input = parse("d -P 80x --env prod --verbose").unwrap();
    router.dispatch(&input, &mut DataBridge::new());

    assert_eq!(
        seen.borrow()[0],
        Seen {
            status: ResponseStatus::UndefinedAndInvalidFlags,
            flags: vec![
                ("-P".to_string(), Some(ValidationStatus::Invalid)),
                ("--env".to_string(), Some(ValidationStatus::Valid)),
                ("--verbose".to_string(), Some(ValidationStatus::Undefined)),
            ],
        }
    );
}

#[test]
fn test_parsed_input_is_left_untouched_by_dispatch() {
    let (router, _) = recording_router();
    let input = parse("deploy --env qa").unwrap();
    router.dispatch(&input, &mut DataBridge::new());

    let flag = input.input_flags.get_by_name("env").unwrap();
    assert_eq!(flag.status, None);
    assert_eq!(
        *flag,
        InputFlag::new("env", Prefix::Single, Some("qa".to_string()))
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse("").unwrap_err(), ParseError::EmptyInput);
    assert_eq!(
        parse("cmd val").unwrap_err(),
        ParseError::UnprocessedFlag("val".to_string())
    );
    assert!(matches!(
        parse("cmd --a val --a val2"),
        Err(ParseError::RepeatedFlag(flag)) if flag.string_entity() == "--a"
    ));
}

#[test]
fn test_collision_across_routers() {
    let mut first = Router::new();
    first.route(Command::new("run"), |_| {}).unwrap();
    let mut second = Router::new();
    second.route(Command::new("run"), |_| {}).unwrap();
    let mut third = Router::new();
    third
        .route(Command::new("walk").with_aliases(["w"]), |_| {})
        .unwrap();

    assert!(matches!(
        validate_routers([&first, &second]),
        Err(RegistrationError::RepeatedTriggerName(_))
    ));
    assert!(validate_routers([&first, &third]).is_ok());
}

#[test]
fn test_suggestion_over_router_triggers() {
    let mut router = Router::new();
    for trigger in ["start", "stop", "status"] {
        router.route(Command::new(trigger), |_| {}).unwrap();
    }
    let known = router.triggers().iter().map(String::as_str);
    assert_eq!(suggest("sta", known), Some("start".to_string()));
    assert_eq!(
        suggest("xyz", router.triggers().iter().map(String::as_str)),
        None
    );
}
