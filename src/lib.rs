//! Turn a phrase into a programming identifier, one translated word at a time.
//!
//! See [`naming`] for the engine and its collaborators.

pub mod naming;

// Re-export the types a front end needs for convenient access
pub use naming::{
    AcronymKind, CasingKind, CodicProvider, MockMode, MockTranslationService, NamingError,
    NamingResult, NavigationEngine, PresentationLayer, Query, ResultAction, SelectOutcome,
    Selection, Settings, SideEffect, SubmitOutcome, TranslationService,
};
