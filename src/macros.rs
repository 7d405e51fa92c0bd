//! Macros for ergonomic configuration construction.

/// Build an [`FsmConfig`](crate::FsmConfig) from a declarative table.
///
/// Expands to [`ConfigBuilder`](crate::ConfigBuilder) calls and yields the
/// builder's `Result`, so malformed tables surface as
/// [`ConfigError`](crate::ConfigError)s rather than panics.
///
/// # Example
///
/// ```
/// use statecraft::fsm_config;
///
/// let config = fsm_config! {
///     initial: "hungry",
///     states: {
///         "hungry" => { "eat" => "sleeping" },
///         "sleeping" => { "wake" => "hungry" },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial(), "hungry");
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {{
        let builder = $crate::FsmConfig::builder().initial($initial);
        $(
            let builder = builder.state($state);
            $(
                let builder = builder.on($event, $target);
            )*
        )*
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::ConfigError;

    #[test]
    fn macro_builds_a_valid_config() {
        let config = fsm_config! {
            initial: "solid",
            states: {
                "solid" => { "melt" => "liquid" },
                "liquid" => { "freeze" => "solid", "boil" => "gas" },
                "gas" => { "condense" => "liquid" },
            }
        }
        .unwrap();

        assert_eq!(config.initial(), "solid");
        assert_eq!(config.states().len(), 3);
        assert_eq!(
            config.state("liquid").unwrap().transitions.get("boil"),
            Some(&"gas".to_string())
        );
    }

    #[test]
    fn macro_allows_states_without_transitions() {
        let config = fsm_config! {
            initial: "start",
            states: {
                "start" => { "finish" => "end" },
                "end" => {},
            }
        }
        .unwrap();

        assert!(config.state("end").unwrap().transitions.is_empty());
    }

    #[test]
    fn macro_surfaces_validation_errors() {
        let result = fsm_config! {
            initial: "start",
            states: {
                "start" => { "go" => "nowhere" },
            }
        };

        assert!(matches!(result, Err(ConfigError::UnknownTarget { .. })));
    }
}
