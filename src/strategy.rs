// Pattern: Strategy - NPCs hold a swappable reaction to threats.
// The reaction learns who its owner is when it's invoked, so there is no
// ownership cycle between an actor and its behavior.

use crate::error::{PatternError, Result};
use crate::narrator::Narrator;
use std::fmt;

// ============================================================================
// The behavior capability and its variants
// ============================================================================

pub trait Reaction: Send + Sync {
    fn react(&self, owner: &Actor, out: &dyn Narrator);
    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FightBehavior;

impl Reaction for FightBehavior {
    fn react(&self, owner: &Actor, out: &dyn Narrator) {
        out.say(&format!(
            "{} draws their weapon to fight the enemy.",
            owner.name()
        ));
    }

    fn label(&self) -> &'static str {
        "fight"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FleeBehavior;

impl Reaction for FleeBehavior {
    fn react(&self, owner: &Actor, out: &dyn Narrator) {
        out.say(&format!("{} runs away from the enemy.", owner.name()));
    }

    fn label(&self) -> &'static str {
        "flee"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeekProtectionBehavior;

impl Reaction for SeekProtectionBehavior {
    fn react(&self, owner: &Actor, out: &dyn Narrator) {
        out.say(&format!(
            "{} runs away from the enemy to find a parent.",
            owner.name()
        ));
    }

    fn label(&self) -> &'static str {
        "seek protection"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoReactionBehavior;

impl Reaction for NoReactionBehavior {
    fn react(&self, owner: &Actor, out: &dyn Narrator) {
        out.say(&format!(
            "{} just stands there, either too scared or really not paying attention.",
            owner.name()
        ));
    }

    fn label(&self) -> &'static str {
        "no reaction"
    }
}

/// The closed set of built-in reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Fight,
    Flee,
    SeekProtection,
    NoReaction,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::Fight,
        ReactionKind::Flee,
        ReactionKind::SeekProtection,
        ReactionKind::NoReaction,
    ];

    pub fn behavior(self) -> Box<dyn Reaction> {
        match self {
            ReactionKind::Fight => Box::new(FightBehavior),
            ReactionKind::Flee => Box::new(FleeBehavior),
            ReactionKind::SeekProtection => Box::new(SeekProtectionBehavior),
            ReactionKind::NoReaction => Box::new(NoReactionBehavior),
        }
    }
}

// ============================================================================
// Actors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    Guard,
    Civilian,
    Child,
    Mercenary,
}

impl ActorRole {
    pub fn default_reaction(self) -> ReactionKind {
        match self {
            ActorRole::Guard | ActorRole::Mercenary => ReactionKind::Fight,
            ActorRole::Civilian => ReactionKind::Flee,
            ActorRole::Child => ReactionKind::SeekProtection,
        }
    }
}

pub struct Actor {
    name: String,
    reaction: Box<dyn Reaction>,
}

impl Actor {
    /// An actor with no particular training just freezes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reaction: Box::new(NoReactionBehavior),
        }
    }

    pub fn with_role(name: impl Into<String>, role: ActorRole) -> Self {
        let mut actor = Self::new(name);
        actor.set_reaction(role.default_reaction().behavior());
        actor
    }

    pub fn guard(name: impl Into<String>) -> Self {
        Self::with_role(name, ActorRole::Guard)
    }

    pub fn civilian(name: impl Into<String>) -> Self {
        Self::with_role(name, ActorRole::Civilian)
    }

    pub fn child(name: impl Into<String>) -> Self {
        Self::with_role(name, ActorRole::Child)
    }

    pub fn mercenary(name: impl Into<String>) -> Self {
        Self::with_role(name, ActorRole::Mercenary)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reaction_label(&self) -> &'static str {
        self.reaction.label()
    }

    /// Takes effect for the very next `react_to_threat`.
    pub fn set_reaction(&mut self, reaction: Box<dyn Reaction>) {
        tracing::debug!(
            actor = %self.name,
            from = self.reaction.label(),
            to = reaction.label(),
            "switching reaction"
        );
        self.reaction = reaction;
    }

    pub fn try_set_reaction(&mut self, reaction: Option<Box<dyn Reaction>>) -> Result<()> {
        match reaction {
            Some(reaction) => {
                self.set_reaction(reaction);
                Ok(())
            }
            None => {
                tracing::warn!(actor = %self.name, "refusing absent reaction");
                Err(PatternError::missing_reaction(&self.name))
            }
        }
    }

    pub fn react_to_threat(&self, out: &dyn Narrator) {
        self.reaction.react(self, out);
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("reaction", &self.reaction.label())
            .finish()
    }
}

pub fn run_demo(out: &dyn Narrator) {
    let sally = Actor::guard("Sally the Guard");
    let mut ernie = Actor::civilian("Ernie the Civilian");
    let lucy = Actor::child("Lucy the Child");
    let carlo = Actor::mercenary("Carlo the Mercenary");

    for actor in [&sally, &ernie, &lucy, &carlo] {
        actor.react_to_threat(out);
    }

    out.say("Ernie sees that Lucy is in danger.");
    ernie.set_reaction(Box::new(FightBehavior));
    ernie.react_to_threat(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::RecordingNarrator;
    use proptest::prelude::*;

    fn expected_line(kind: ReactionKind, name: &str) -> String {
        match kind {
            ReactionKind::Fight => format!("{name} draws their weapon to fight the enemy."),
            ReactionKind::Flee => format!("{name} runs away from the enemy."),
            ReactionKind::SeekProtection => {
                format!("{name} runs away from the enemy to find a parent.")
            }
            ReactionKind::NoReaction => format!(
                "{name} just stands there, either too scared or really not paying attention."
            ),
        }
    }

    #[test]
    fn test_plain_actor_has_default_reaction() {
        let out = RecordingNarrator::new();
        let bystander = Actor::new("Bob");
        bystander.react_to_threat(&out);

        assert_eq!(bystander.reaction_label(), "no reaction");
        assert_eq!(out.lines(), vec![expected_line(ReactionKind::NoReaction, "Bob")]);
    }

    #[test]
    fn test_roles_fix_initial_reaction() {
        assert_eq!(Actor::guard("g").reaction_label(), "fight");
        assert_eq!(Actor::civilian("c").reaction_label(), "flee");
        assert_eq!(Actor::child("k").reaction_label(), "seek protection");
        assert_eq!(Actor::mercenary("m").reaction_label(), "fight");
    }

    #[test]
    fn test_ernie_switches_from_flee_to_fight() {
        let out = RecordingNarrator::new();
        let mut ernie = Actor::civilian("Ernie");
        ernie.set_reaction(Box::new(FightBehavior));
        ernie.react_to_threat(&out);

        assert_eq!(out.lines(), vec!["Ernie draws their weapon to fight the enemy."]);
        assert_eq!(out.count_containing("runs away"), 0);
    }

    #[test]
    fn test_absent_reaction_rejected_and_previous_kept() {
        let out = RecordingNarrator::new();
        let mut lucy = Actor::child("Lucy");

        let err = lucy.try_set_reaction(None).unwrap_err();
        assert_eq!(err, PatternError::missing_reaction("Lucy"));

        lucy.react_to_threat(&out);
        assert_eq!(out.lines(), vec![expected_line(ReactionKind::SeekProtection, "Lucy")]);
    }

    #[test]
    fn test_try_set_reaction_accepts_some() {
        let mut carlo = Actor::mercenary("Carlo");
        carlo
            .try_set_reaction(Some(ReactionKind::Flee.behavior()))
            .unwrap();
        assert_eq!(carlo.reaction_label(), "flee");
    }

    #[test]
    fn test_debug_shows_reaction() {
        let sally = Actor::guard("Sally");
        assert_eq!(
            format!("{:?}", sally),
            "Actor { name: \"Sally\", reaction: \"fight\" }"
        );
    }

    #[test]
    fn test_demo_sequence() {
        let out = RecordingNarrator::new();
        run_demo(&out);

        assert_eq!(
            out.lines(),
            vec![
                "Sally the Guard draws their weapon to fight the enemy.",
                "Ernie the Civilian runs away from the enemy.",
                "Lucy the Child runs away from the enemy to find a parent.",
                "Carlo the Mercenary draws their weapon to fight the enemy.",
                "Ernie sees that Lucy is in danger.",
                "Ernie the Civilian draws their weapon to fight the enemy.",
            ]
        );
    }

    fn kind() -> impl Strategy<Value = ReactionKind> {
        prop::sample::select(ReactionKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_latest_reaction_always_wins(kinds in prop::collection::vec(kind(), 1..20)) {
            let out = RecordingNarrator::new();
            let mut actor = Actor::new("Ernie");

            for k in &kinds {
                actor.set_reaction(k.behavior());
                out.clear();
                actor.react_to_threat(&out);
                prop_assert_eq!(out.lines(), vec![expected_line(*k, "Ernie")]);
            }
        }
    }
}
