//! The one-line declaration printed before the command runs

use crate::assertion::policy::{AssertionPolicy, OutputPolicy};
use crate::config::{AssertionConfig, ExecutionStrategy};

/// Describe the test about to run, terminated by a newline
pub fn declaration(config: &AssertionConfig) -> String {
    let mut text = String::new();

    if let Some(name) = &config.name {
        text.push_str(&format!("{name}: "));
    }

    let action_phrase = match config.strategy {
        ExecutionStrategy::Once => {
            text.push_str(&format!("executing {} once", quote(&config.command)));
            ", expecting"
        }
        ExecutionStrategy::Until => {
            text.push_str(&format!(
                "executing {} every {:.3}s for {:.3}s",
                quote(&config.command),
                config.interval.as_secs_f64(),
                config.timeout.as_secs_f64()
            ));
            ", or until"
        }
    };

    text.push_str(&describe_assertions(action_phrase, &config.policy));
    text.push('\n');
    text
}

/// Describe the meaningful assertions, or nothing if there are none.
///
/// Produces e.g. `, expecting success and output that contains `a`, and
/// doesn't contain `b``.
pub fn describe_assertions(action_phrase: &str, policy: &AssertionPolicy) -> String {
    let result_meaningful = policy.result.is_meaningful();
    let output_meaningful = policy.has_meaningful_output();

    let mut description = String::new();
    if !result_meaningful && !output_meaningful {
        return description;
    }

    description.push_str(action_phrase);

    if result_meaningful {
        description.push_str(&format!(" {}", policy.result));
        if output_meaningful {
            description.push_str(" and");
        }
    }

    let mut items: Vec<String> = policy
        .outputs
        .iter()
        .filter_map(|assertion| {
            let pattern = quote(assertion.pattern.as_str());
            match assertion.policy {
                OutputPolicy::RequireContains => Some(format!("contains {pattern}")),
                OutputPolicy::RequireExcludes => Some(format!("doesn't contain {pattern}")),
                OutputPolicy::Ambivalent => None,
            }
        })
        .collect();

    if items.len() > 1 {
        if let Some(last) = items.last_mut() {
            last.insert_str(0, "and ");
        }
    }

    if output_meaningful {
        description.push_str(&format!(" output that {}", items.join(", ")));
    }

    description
}

/// Back-quote text for display, falling back to an escaped double-quoted
/// string when back-quotes could not show it faithfully
pub fn quote(text: &str) -> String {
    let needs_escaping = text
        .chars()
        .any(|c| c == '`' || c == '\u{feff}' || (c.is_control() && c != '\t'));

    if needs_escaping {
        format!("{text:?}")
    } else {
        format!("`{text}`")
    }
}
