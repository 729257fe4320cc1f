// Pattern: Adapter - a caster enters a weapons-only tournament through a staff.
// The staff implements the weapon capability by delegating to the caster's spells.

use crate::error::{PatternError, Result};
use crate::narrator::Narrator;

// ============================================================================
// Target: what the tournament expects
// ============================================================================

pub trait WeaponUser {
    fn perform_attack(&self, out: &dyn Narrator);
    fn perform_guard(&self, out: &dyn Narrator);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fighter {
    pub name: String,
    pub weapon: String,
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
}

impl Fighter {
    pub fn new(
        name: impl Into<String>,
        weapon: impl Into<String>,
        hp: u32,
        atk: u32,
        def: u32,
    ) -> Self {
        Self {
            name: name.into(),
            weapon: weapon.into(),
            hp,
            atk,
            def,
        }
    }
}

impl WeaponUser for Fighter {
    fn perform_attack(&self, out: &dyn Narrator) {
        out.say(&format!(
            "{} attacks with a {} for {} damage.",
            self.name, self.weapon, self.atk
        ));
    }

    fn perform_guard(&self, out: &dyn Narrator) {
        out.say(&format!("{} guards, reducing the damage.", self.name));
    }
}

// ============================================================================
// Adaptee: a different shape of combatant
// ============================================================================

pub trait MagicUser {
    fn name(&self) -> &str;
    fn cast_spell(&self, out: &dyn Narrator);
    fn cast_shield(&self, out: &dyn Narrator);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caster {
    pub name: String,
    pub element: String,
    pub hp: u32,
    pub mp: u32,
    pub mag: u32,
    pub def: u32,
}

impl Caster {
    pub fn new(
        name: impl Into<String>,
        element: impl Into<String>,
        hp: u32,
        mp: u32,
        mag: u32,
        def: u32,
    ) -> Self {
        Self {
            name: name.into(),
            element: element.into(),
            hp,
            mp,
            mag,
            def,
        }
    }
}

impl MagicUser for Caster {
    fn name(&self) -> &str {
        &self.name
    }

    fn cast_spell(&self, out: &dyn Narrator) {
        out.say(&format!(
            "{} casts {} for {} damage.",
            self.name, self.element, self.mag
        ));
    }

    fn cast_shield(&self, out: &dyn Narrator) {
        out.say(&format!(
            "{} casts a shield, neutralizing the damage.",
            self.name
        ));
    }
}

// ============================================================================
// Adapter: borrows the caster, never owns it
// ============================================================================

#[derive(Debug)]
pub struct StaffAdapter<'a, M: MagicUser + ?Sized = Caster> {
    caster: &'a M,
}

impl<'a, M: MagicUser + ?Sized> StaffAdapter<'a, M> {
    pub fn new(caster: &'a M) -> Self {
        Self { caster }
    }

    /// Fallible construction for callers that may not have a caster at hand.
    pub fn try_from_option(caster: Option<&'a M>) -> Result<Self> {
        match caster {
            Some(caster) => Ok(Self::new(caster)),
            None => {
                tracing::warn!("refusing to build a staff adapter without a caster");
                Err(PatternError::MissingCaster)
            }
        }
    }

    pub fn caster(&self) -> &'a M {
        self.caster
    }
}

impl<M: MagicUser + ?Sized> WeaponUser for StaffAdapter<'_, M> {
    fn perform_attack(&self, out: &dyn Narrator) {
        tracing::debug!(caster = self.caster.name(), "staff attack -> cast_spell");
        out.say(&format!(
            "{} uses a staff to cast a spell.",
            self.caster.name()
        ));
        self.caster.cast_spell(out);
    }

    fn perform_guard(&self, out: &dyn Narrator) {
        tracing::debug!(caster = self.caster.name(), "staff guard -> cast_shield");
        out.say(&format!(
            "{} uses a staff to cast a shield.",
            self.caster.name()
        ));
        self.caster.cast_shield(out);
    }
}

fn enter_round(contestant: &dyn WeaponUser, out: &dyn Narrator) {
    contestant.perform_attack(out);
    contestant.perform_guard(out);
}

pub fn run_demo(out: &dyn Narrator) {
    let dursal = Fighter::new("Dursal", "axe", 100, 10, 10);
    let myrin = Caster::new("Myrin", "lightning", 100, 10, 10, 10);
    let myrin_with_staff = StaffAdapter::new(&myrin);

    out.heading("The Warrior:");
    enter_round(&dursal, out);

    out.heading("The Unwrapped Mage:");
    myrin.cast_spell(out);
    myrin.cast_shield(out);

    out.heading("The Mage Using a Staff:");
    enter_round(&myrin_with_staff, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::RecordingNarrator;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingCaster {
        spells: Cell<usize>,
        shields: Cell<usize>,
    }

    impl MagicUser for CountingCaster {
        fn name(&self) -> &str {
            "Counter"
        }

        fn cast_spell(&self, _out: &dyn Narrator) {
            self.spells.set(self.spells.get() + 1);
        }

        fn cast_shield(&self, _out: &dyn Narrator) {
            self.shields.set(self.shields.get() + 1);
        }
    }

    #[test]
    fn test_fighter_lines() {
        let out = RecordingNarrator::new();
        let dursal = Fighter::new("Dursal", "axe", 100, 10, 10);
        dursal.perform_attack(&out);
        dursal.perform_guard(&out);

        assert_eq!(
            out.lines(),
            vec![
                "Dursal attacks with a axe for 10 damage.",
                "Dursal guards, reducing the damage.",
            ]
        );
    }

    #[test]
    fn test_staff_attack_channels_then_casts() {
        let out = RecordingNarrator::new();
        let myrin = Caster::new("Myrin", "lightning", 100, 10, 10, 10);
        StaffAdapter::new(&myrin).perform_attack(&out);

        let lines = out.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Myrin") && lines[0].contains("staff"));
        assert!(lines[1].contains("lightning") && lines[1].contains("10"));
    }

    #[test]
    fn test_staff_guard_channels_then_shields() {
        let out = RecordingNarrator::new();
        let myrin = Caster::new("Myrin", "lightning", 100, 10, 10, 10);
        StaffAdapter::new(&myrin).perform_guard(&out);

        assert_eq!(
            out.lines(),
            vec![
                "Myrin uses a staff to cast a shield.",
                "Myrin casts a shield, neutralizing the damage.",
            ]
        );
    }

    #[test]
    fn test_each_operation_delegates_exactly_once() {
        let out = RecordingNarrator::new();
        let caster = CountingCaster::default();
        let staff = StaffAdapter::new(&caster);

        staff.perform_attack(&out);
        assert_eq!(caster.spells.get(), 1);
        assert_eq!(caster.shields.get(), 0);

        staff.perform_guard(&out);
        assert_eq!(caster.spells.get(), 1);
        assert_eq!(caster.shields.get(), 1);
    }

    #[test]
    fn test_adapter_rejects_absent_caster() {
        let result = StaffAdapter::<Caster>::try_from_option(None);
        assert_eq!(result.unwrap_err(), PatternError::MissingCaster);
    }

    #[test]
    fn test_adapter_borrows_caster() {
        let myrin = Caster::new("Myrin", "lightning", 100, 10, 10, 10);
        {
            let staff = StaffAdapter::try_from_option(Some(&myrin)).unwrap();
            assert!(std::ptr::eq(staff.caster(), &myrin));
        }
        // Caster outlives the adapter.
        assert_eq!(myrin.name, "Myrin");
    }

    #[test]
    fn test_adapter_as_trait_object() {
        let out = RecordingNarrator::new();
        let myrin = Caster::new("Myrin", "fire", 80, 20, 15, 5);
        let contestants: Vec<Box<dyn WeaponUser + '_>> = vec![
            Box::new(Fighter::new("Dursal", "axe", 100, 10, 10)),
            Box::new(StaffAdapter::new(&myrin)),
        ];

        for contestant in &contestants {
            contestant.perform_attack(&out);
        }
        assert_eq!(out.lines().len(), 3);
        assert_eq!(out.lines()[2], "Myrin casts fire for 15 damage.");
    }

    #[test]
    fn test_demo_sequence() {
        let out = RecordingNarrator::new();
        run_demo(&out);

        assert_eq!(
            out.lines(),
            vec![
                "The Warrior:",
                "Dursal attacks with a axe for 10 damage.",
                "Dursal guards, reducing the damage.",
                "The Unwrapped Mage:",
                "Myrin casts lightning for 10 damage.",
                "Myrin casts a shield, neutralizing the damage.",
                "The Mage Using a Staff:",
                "Myrin uses a staff to cast a spell.",
                "Myrin casts lightning for 10 damage.",
                "Myrin uses a staff to cast a shield.",
                "Myrin casts a shield, neutralizing the damage.",
            ]
        );
    }
}
