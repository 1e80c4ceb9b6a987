//! Guard lint rules

pub mod no_process_env;
pub mod no_verb_noun_confusion;

// Re-export rule structs
pub use no_process_env::NoProcessEnv;
pub use no_verb_noun_confusion::NoVerbNounConfusion;

use crate::Rule;

/// Every rule shipped by the plugin, in registration order
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NoProcessEnv::new()),
        Box::new(NoVerbNounConfusion::new()),
    ]
}
