pub mod assembler;
pub mod configurator;
pub mod drafts;
pub mod errors;
pub mod selection;
pub mod validation;

pub use assembler::{AssemblyOutcome, DraftAssembler};
pub use configurator::{ConfigurationOutcome, InstanceConfigurator};
pub use drafts::TournamentDraftService;
pub use errors::{ConfigError, DraftError, MetadataError, ValidationIssue, ValidationSummary};
pub use selection::SelectionEngine;
pub use validation::InstanceValidator;
