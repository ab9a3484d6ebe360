//! Cross-router collision checks run once before the application serves input.

use std::collections::BTreeSet;

use crate::error::RegistrationError;

use super::router::Router;

/// Verifies that no trigger or alias is owned by more than one router.
///
/// Routers are processed in order; the first router whose names intersect
/// anything seen on earlier routers is reported.
pub fn validate_routers<'a>(
    routers: impl IntoIterator<Item = &'a Router>,
) -> Result<(), RegistrationError> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for router in routers {
        let repeated_triggers = intersection(router.triggers(), &seen);
        if !repeated_triggers.is_empty() {
            return Err(RegistrationError::RepeatedTriggerName(repeated_triggers));
        }

        let repeated_aliases = intersection(router.aliases(), &seen);
        if !repeated_aliases.is_empty() {
            return Err(RegistrationError::RepeatedAliasName(repeated_aliases));
        }

        seen.extend(router.triggers().iter().map(String::as_str));
        seen.extend(router.aliases().iter().map(String::as_str));
    }

    Ok(())
}

fn intersection(names: &BTreeSet<String>, seen: &BTreeSet<&str>) -> BTreeSet<String> {
    names
        .iter()
        .filter(|name| seen.contains(name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::command::Command;

    fn router(commands: impl IntoIterator<Item = Command>) -> Router {
        let mut router = Router::new();
        for command in commands {
            router.route(command, |_| {}).unwrap();
        }
        router
    }

    fn cmd(trigger: &str, aliases: &[&str]) -> Command {
        Command::new(trigger).with_aliases(aliases.iter().copied())
    }

    #[test]
    fn test_disjoint_routers_pass() {
        let a = router([cmd("run", &["r"]), cmd("stop", &[])]);
        let b = router([cmd("status", &["st"])]);
        assert!(validate_routers([&a, &b]).is_ok());
    }

    #[test]
    fn test_repeated_trigger_across_routers() {
        let a = router([cmd("run", &[])]);
        let b = router([cmd("run", &[])]);
        let err = validate_routers([&a, &b]).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::RepeatedTriggerName(BTreeSet::from(["run".to_string()]))
        );
    }

    #[test]
    fn test_trigger_colliding_with_earlier_alias() {
        let a = router([cmd("start", &["go"])]);
        let b = router([cmd("go", &[])]);
        assert!(matches!(
            validate_routers([&a, &b]),
            Err(RegistrationError::RepeatedTriggerName(names)) if names.contains("go")
        ));
    }

    #[test]
    fn test_repeated_alias_reports_every_offender() {
        let a = router([cmd("start", &["go", "s"])]);
        let b = router([cmd("launch", &["go", "s", "l"])]);
        let err = validate_routers([&a, &b]).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::RepeatedAliasName(BTreeSet::from([
                "go".to_string(),
                "s".to_string()
            ]))
        );
    }

    #[test]
    fn test_later_router_is_blamed() {
        let a = router([cmd("one", &[])]);
        let b = router([cmd("two", &[])]);
        let c = router([cmd("one", &[]), cmd("two", &[])]);
        let err = validate_routers([&a, &b, &c]).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::RepeatedTriggerName(BTreeSet::from([
                "one".to_string(),
                "two".to_string()
            ]))
        );
    }

    #[test]
    fn test_no_routers() {
        assert!(validate_routers(std::iter::empty()).is_ok());
    }
}
