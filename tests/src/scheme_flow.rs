//! Scheme Catalog and Application Tests
//!
//! Cross-checks the catalog against the localization tables and walks a
//! complete application.

#[cfg(test)]
mod tests {
    use arogya_patient::family::{FamilyRegistry, Gender, MemberDraft, Relation};
    use arogya_patient::schemes::{scheme, ApplicationView, SchemeApplication, SCHEMES};
    use arogya_shared::i18n::{translate, Language};
    use arogya_shared::notify::NotificationLog;

    #[test]
    fn every_scheme_is_fully_localized() {
        for scheme in &SCHEMES {
            for language in Language::ALL {
                assert!(!scheme.title.get(language).is_empty());
                assert!(!scheme.description.get(language).is_empty());
                assert!(!scheme.steps.get(language).is_empty());
            }
        }
    }

    #[test]
    fn migrant_worker_scheme_is_the_fast_track() {
        let migrant = scheme(3).unwrap();
        assert_eq!(migrant.processing_time, "3-7 days");
        assert_eq!(migrant.steps.en.len(), 7);
        assert!(migrant
            .eligibility
            .get(Language::En)
            .contains(&"Migrant worker in Kerala"));
    }

    #[test]
    fn application_walk_matches_the_published_steps() {
        let mut notices = NotificationLog::new();
        let mut app = SchemeApplication::open(4);
        app.start();
        let total = scheme(4).unwrap().steps.en.len();
        for expected in 1..=total {
            match app.view() {
                ApplicationView::Step { number, .. } => assert_eq!(number, expected),
                other => panic!("expected a step view, got {other:?}"),
            }
            assert!(app.current_step_text(Language::En).is_some());
            app.next(&mut notices);
        }
        assert_eq!(app.view(), ApplicationView::Submitted);
        assert_eq!(app.current_step_text(Language::En), None);
        assert_eq!(
            notices.latest().map(|n| n.message.as_str()),
            Some("Application submitted successfully!")
        );
    }

    #[test]
    fn family_grows_alongside_an_application() {
        let mut notices = NotificationLog::new();
        let mut registry = FamilyRegistry::seeded();
        let before = registry.members().len();
        let added = registry.add(
            &MemberDraft {
                name: "Meena Kumari".into(),
                age: "26".into(),
                gender: Some(Gender::Female),
                relation: Some(Relation::Daughter),
            },
            Language::Hi,
            &mut notices,
        );
        assert!(added.is_valid());
        assert_eq!(registry.members().len(), before + 1);
        assert_eq!(
            notices.latest().map(|n| n.message.as_str()),
            Some(translate("memberAdded", Language::Hi))
        );
    }
}
