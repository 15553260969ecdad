//! # Action Registry
//!
//! Static table binding wire discriminants to action kinds. Built once at
//! startup and shared (behind an `Arc`) by the codec and the processor.
//!
//! A discriminant is never reused. Retiring one leaves a tombstone so that a
//! later `register` for the same byte fails instead of silently changing the
//! meaning of already-committed transactions.

use crate::domain::actions::ActionKind;
use crate::domain::errors::RegistryError;
use std::collections::BTreeMap;

pub const CREATE_ACCOUNT_DISCRIMINANT: u8 = 0x01;
pub const ADD_POST_DISCRIMINANT: u8 = 0x02;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Active(ActionKind),
    Retired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionRegistry {
    slots: BTreeMap<u8, Slot>,
}

impl ActionRegistry {
    /// Registry with no kinds enabled.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The production table: `CreateAccount = 0x01`, `AddPost = 0x02`.
    pub fn standard() -> Self {
        Self {
            slots: BTreeMap::from([
                (CREATE_ACCOUNT_DISCRIMINANT, Slot::Active(ActionKind::CreateAccount)),
                (ADD_POST_DISCRIMINANT, Slot::Active(ActionKind::AddPost)),
            ]),
        }
    }

    pub fn register(&mut self, discriminant: u8, kind: ActionKind) -> Result<(), RegistryError> {
        if discriminant == 0 {
            return Err(RegistryError::ReservedDiscriminant);
        }
        match self.slots.get(&discriminant) {
            Some(Slot::Active(_)) => return Err(RegistryError::DiscriminantInUse(discriminant)),
            Some(Slot::Retired) => return Err(RegistryError::DiscriminantRetired(discriminant)),
            None => {}
        }
        if self.discriminant_of(kind).is_some() {
            return Err(RegistryError::KindAlreadyRegistered(kind));
        }
        self.slots.insert(discriminant, Slot::Active(kind));
        Ok(())
    }

    /// Disable a discriminant permanently. Returns the kind it carried.
    pub fn retire(&mut self, discriminant: u8) -> Result<ActionKind, RegistryError> {
        match self.slots.get(&discriminant).copied() {
            Some(Slot::Active(kind)) => {
                self.slots.insert(discriminant, Slot::Retired);
                Ok(kind)
            }
            Some(Slot::Retired) => Err(RegistryError::DiscriminantRetired(discriminant)),
            None => Err(RegistryError::UnknownDiscriminant(discriminant)),
        }
    }

    /// Kind bound to `discriminant`, or `None` if unknown or retired.
    pub fn kind_of(&self, discriminant: u8) -> Option<ActionKind> {
        match self.slots.get(&discriminant) {
            Some(Slot::Active(kind)) => Some(*kind),
            _ => None,
        }
    }

    pub fn discriminant_of(&self, kind: ActionKind) -> Option<u8> {
        self.slots.iter().find_map(|(d, slot)| match slot {
            Slot::Active(k) if *k == kind => Some(*d),
            _ => None,
        })
    }

    pub fn is_enabled(&self, kind: ActionKind) -> bool {
        self.discriminant_of(kind).is_some()
    }

    pub fn is_retired(&self, discriminant: u8) -> bool {
        matches!(self.slots.get(&discriminant), Some(Slot::Retired))
    }
}
