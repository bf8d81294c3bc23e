//! Family member registry.
//!
//! Seeded with demo members and extended through a validated add form.
//! Members only accumulate; there is no edit or removal.

use arogya_shared::i18n::{translate, Language};
use arogya_shared::notify::NotificationLog;
use arogya_shared::validate::Validity;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Relationship of a member to the account holder.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Relation {
    Wife,
    Husband,
    Son,
    Daughter,
    Father,
    Mother,
}

impl Relation {
    pub const ALL: [Self; 6] = [
        Self::Wife,
        Self::Husband,
        Self::Son,
        Self::Daughter,
        Self::Father,
        Self::Mother,
    ];

    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Wife => "wife",
            Self::Husband => "husband",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Father => "father",
            Self::Mother => "mother",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FamilyMember {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub relation: Relation,
}

/// What the add-member form collects before validation.
#[derive(Clone, Debug, Default)]
pub struct MemberDraft {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub relation: Option<Relation>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FamilyRegistry {
    members: Vec<FamilyMember>,
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl FamilyRegistry {
    /// The demo household every session starts with.
    pub fn seeded() -> Self {
        Self {
            members: vec![
                FamilyMember {
                    id: 1,
                    name: "Sunita Kumar".into(),
                    age: 28,
                    gender: Gender::Female,
                    relation: Relation::Wife,
                },
                FamilyMember {
                    id: 2,
                    name: "Arjun Kumar".into(),
                    age: 8,
                    gender: Gender::Male,
                    relation: Relation::Son,
                },
                FamilyMember {
                    id: 3,
                    name: "Priya Kumar".into(),
                    age: 5,
                    gender: Gender::Female,
                    relation: Relation::Daughter,
                },
            ],
        }
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    /// Validate the draft and, if complete, append the member and
    /// notify in the active language.
    pub fn add(
        &mut self,
        draft: &MemberDraft,
        language: Language,
        notices: &mut NotificationLog,
    ) -> Validity {
        if draft.name.trim().is_empty() {
            return Validity::invalid("Name is required");
        }
        let age = match draft.age.trim().parse::<u8>() {
            Ok(age) if age > 0 => age,
            _ => return Validity::invalid("Age must be a number"),
        };
        let Some(gender) = draft.gender else {
            return Validity::invalid("Gender is required");
        };
        let Some(relation) = draft.relation else {
            return Validity::invalid("Relation is required");
        };
        let id = self.members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.members.push(FamilyMember {
            id,
            name: draft.name.trim().to_owned(),
            age,
            gender,
            relation,
        });
        notices.success(translate("memberAdded", language));
        Validity::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_with_the_demo_household() {
        let registry = FamilyRegistry::seeded();
        assert_eq!(registry.members().len(), 3);
        assert_eq!(registry.members()[0].relation, Relation::Wife);
    }

    #[test]
    fn incomplete_draft_is_rejected_without_mutating() {
        let mut notices = NotificationLog::new();
        let mut registry = FamilyRegistry::seeded();
        let draft = MemberDraft {
            name: "Anita".into(),
            age: "34".into(),
            gender: Some(Gender::Female),
            relation: None,
        };
        assert_eq!(
            registry.add(&draft, Language::En, &mut notices),
            Validity::invalid("Relation is required")
        );
        assert_eq!(registry.members().len(), 3);
        assert!(notices.notices().is_empty());
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let mut notices = NotificationLog::new();
        let mut registry = FamilyRegistry::seeded();
        let draft = MemberDraft {
            name: "Anita".into(),
            age: "thirty".into(),
            gender: Some(Gender::Female),
            relation: Some(Relation::Mother),
        };
        assert!(!registry.add(&draft, Language::En, &mut notices).is_valid());
    }

    #[test]
    fn valid_draft_appends_and_notifies_in_language() {
        let mut notices = NotificationLog::new();
        let mut registry = FamilyRegistry::seeded();
        let draft = MemberDraft {
            name: "  Anita Devi ".into(),
            age: "54".into(),
            gender: Some(Gender::Female),
            relation: Some(Relation::Mother),
        };
        assert!(registry.add(&draft, Language::Ml, &mut notices).is_valid());
        let added = registry.members().last().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.name, "Anita Devi");
        assert_eq!(added.age, 54);
        assert_eq!(
            notices.latest().map(|n| n.message.as_str()),
            Some(translate("memberAdded", Language::Ml))
        );
    }
}
