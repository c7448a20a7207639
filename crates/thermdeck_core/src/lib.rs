//! Core navigation types for thermdeck
//!
//! This crate provides the navigation state machine of a slide-deck presentation:
//!
//! - [`Deck`] - Loadable description of slides and their sections
//! - [`DeckValidator`] - Checks a deck before it is presented
//! - [`SectionController`] - Active section of one mounted slide
//! - [`Presentation`] - Root controller: current slide, mode, mounts, listeners
//! - [`ListenerRegistry`] - Live listeners, scoped to slide mounts
//! - [`InputEvent`] - Platform-neutral input delivered to the presentation

mod controls;
mod deck;
mod deck_validator;
mod input;
mod listener;
mod navigation;
mod presentation;
mod section;

pub use controls::{ControlsState, ProgressDot};
pub use deck::{Deck, DeckError, SectionSpec, SlideSpec};
pub use deck_validator::{DeckValidator, ValidationError};
pub use input::{ClickTarget, Dispatch, InputEvent, Key};
pub use listener::{EventKinds, Listener, ListenerKey, ListenerOwner, ListenerRegistry};
pub use navigation::{
    Direction, EntryPoint, MountId, NavCommand, NavEvent, NavigationMode, TransitionRequest,
};
pub use presentation::Presentation;
pub use section::{SectionController, SectionStep};
