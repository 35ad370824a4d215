//! Scroll-triggered reveal of page sections.
//!
//! Every target starts hidden and becomes revealed once its top edge comes
//! within [`REVEAL_OFFSET_PX`] of the bottom of the viewport. Revealed targets
//! never go back to hidden, so scrolling up again leaves them in place.

use std::{collections::BTreeSet, fmt, str::FromStr};

use thiserror::Error;

/// Distance above the bottom of the viewport an element must reach.
pub const REVEAL_OFFSET_PX: f64 = 100.0;

/// An element's `top` is relative to the top of the viewport, as reported by
/// `getBoundingClientRect`.
pub fn is_revealed(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_OFFSET_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealTarget {
    Hero,
    About,
    Projects,
    Contact,
    ProjectCard(u32),
}

impl RevealTarget {
    /// The page sections, in page order. Project cards are added per project.
    pub const SECTIONS: [RevealTarget; 4] = [
        RevealTarget::Hero,
        RevealTarget::About,
        RevealTarget::Projects,
        RevealTarget::Contact,
    ];
}

impl fmt::Display for RevealTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealTarget::Hero => write!(f, "hero"),
            RevealTarget::About => write!(f, "about"),
            RevealTarget::Projects => write!(f, "projects"),
            RevealTarget::Contact => write!(f, "contact"),
            RevealTarget::ProjectCard(id) => write!(f, "project-{id}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown reveal target: {0}")]
pub struct UnknownRevealTarget(pub String);

impl FromStr for RevealTarget {
    type Err = UnknownRevealTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "about" => Ok(Self::About),
            "projects" => Ok(Self::Projects),
            "contact" => Ok(Self::Contact),
            x => x
                .strip_prefix("project-")
                .and_then(|id| id.parse().ok())
                .map(Self::ProjectCard)
                .ok_or_else(|| UnknownRevealTarget(x.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Next state after measuring the element. `Revealed` is absorbing.
    pub fn observe(self, top: f64, viewport_height: f64) -> Self {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Hidden if is_revealed(top, viewport_height) => RevealState::Revealed,
            RevealState::Hidden => RevealState::Hidden,
        }
    }
}

/// Targets that have been revealed at least once. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: BTreeSet<RevealTarget>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, target: RevealTarget) -> RevealState {
        if self.revealed.contains(&target) {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.state(target) == RevealState::Revealed
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Applies one round of measurements, given as `(target, top)` pairs, and
    /// returns the targets that were revealed by it.
    pub fn observe<I>(&mut self, measurements: I, viewport_height: f64) -> Vec<RevealTarget>
    where
        I: IntoIterator<Item = (RevealTarget, f64)>,
    {
        measurements
            .into_iter()
            .filter_map(|(target, top)| {
                let next = self.state(target).observe(top, viewport_height);
                (next == RevealState::Revealed && self.revealed.insert(target)).then_some(target)
            })
            .collect()
    }

    /// Class list for a target element.
    pub fn class_for(&self, target: RevealTarget, base: &str) -> String {
        if self.is_revealed(target) {
            format!("{base} scroll-reveal active")
        } else {
            format!("{base} scroll-reveal")
        }
    }
}
