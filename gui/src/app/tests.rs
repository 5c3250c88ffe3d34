use super::*;

mod common {
    use super::*;

    pub(super) fn make_name(name: &str) -> Name {
        Name::try_from(name).unwrap()
    }

    pub(super) fn create_test_app() -> TownLoaderApp {
        TownLoaderApp::new(LoadoutStore::in_memory())
    }

    /// An app showing a "rifles" loadout with two guns.
    pub(super) fn app_with_rifles() -> (TownLoaderApp, Name) {
        let mut app = create_test_app();
        let name = make_name("rifles");
        app.apply_dialog(DialogResult::CreateLoadout("rifles".to_string()));
        app.select_loadout(name.clone());
        app.apply_dialog(DialogResult::AddGun("ak47+grip".to_string()));
        app.apply_dialog(DialogResult::AddGun("mp5".to_string()));
        (app, name)
    }

    pub(super) fn guns_of(app: &TownLoaderApp, name: &Name) -> Vec<String> {
        app.store.loadouts().guns(name).unwrap().to_vec()
    }
}

mod new_loadout {
    use super::*;

    #[test]
    fn test_button_opens_name_prompt() {
        let mut app = common::create_test_app();

        app.apply_action(Action::NewLoadout);

        assert_eq!(
            app.dialog,
            Dialog::NewLoadout {
                name: String::new()
            }
        );
    }

    #[test]
    fn test_submitted_name_creates_loadout() {
        let mut app = common::create_test_app();

        app.apply_dialog(DialogResult::CreateLoadout("rifles".to_string()));

        assert!(app.store.loadouts().contains(&common::make_name("rifles")));
    }

    #[test]
    fn test_created_loadout_is_not_auto_selected() {
        let mut app = common::create_test_app();

        app.apply_dialog(DialogResult::CreateLoadout("rifles".to_string()));

        assert_eq!(app.current, None);
    }

    #[test]
    fn test_whitespace_name_shows_invalid_name_notice() {
        let mut app = common::create_test_app();

        app.apply_dialog(DialogResult::CreateLoadout("   ".to_string()));

        assert!(app.store.loadouts().is_empty());
        assert!(matches!(
            app.dialog,
            Dialog::Notice { ref title, .. } if title == "Invalid Name"
        ));
    }

    #[test]
    fn test_recreating_current_loadout_empties_gun_pane() {
        let (mut app, name) = common::app_with_rifles();

        app.apply_dialog(DialogResult::CreateLoadout("rifles".to_string()));

        assert!(common::guns_of(&app, &name).is_empty());
        assert_eq!(app.current, Some(name));
    }
}

mod select_loadout {
    use super::*;

    #[test]
    fn test_click_sets_current_and_clears_gun_selection() {
        let (mut app, _name) = common::app_with_rifles();
        app.selected_gun = Some(1);
        app.apply_dialog(DialogResult::CreateLoadout("smgs".to_string()));

        app.select_loadout(common::make_name("smgs"));

        assert_eq!(app.current, Some(common::make_name("smgs")));
        assert_eq!(app.selected_gun, None);
    }
}

mod add_gun {
    use super::*;

    #[test]
    fn test_without_loadout_warns() {
        let mut app = common::create_test_app();

        app.apply_action(Action::AddGun);

        assert_eq!(
            app.dialog,
            Dialog::notice("No Loadout", "Please select or create a loadout first.")
        );
    }

    #[test]
    fn test_with_loadout_opens_gun_prompt() {
        let (mut app, _name) = common::app_with_rifles();

        app.apply_action(Action::AddGun);

        assert_eq!(app.dialog, Dialog::AddGun { gun: String::new() });
    }

    #[test]
    fn test_submitted_gun_appends_to_current_loadout() {
        let (mut app, name) = common::app_with_rifles();

        app.apply_dialog(DialogResult::AddGun("famas".to_string()));

        assert_eq!(
            common::guns_of(&app, &name),
            ["ak47+grip", "mp5", "famas"]
        );
    }
}

mod remove_gun {
    use super::*;

    #[test]
    fn test_without_loadout_warns() {
        let mut app = common::create_test_app();

        app.apply_action(Action::RemoveGun);

        assert_eq!(
            app.dialog,
            Dialog::notice("No Loadout", "Please select a loadout first.")
        );
    }

    #[test]
    fn test_without_selection_warns() {
        let (mut app, _name) = common::app_with_rifles();

        app.apply_action(Action::RemoveGun);

        assert_eq!(
            app.dialog,
            Dialog::notice("No Selection", "Please select a gun to remove.")
        );
    }

    #[test]
    fn test_removes_selected_gun_and_clears_selection() {
        let (mut app, name) = common::app_with_rifles();
        app.apply_gun_event(GunListEvent::Clicked(1));

        app.apply_action(Action::RemoveGun);

        assert_eq!(common::guns_of(&app, &name), ["ak47+grip"]);
        assert_eq!(app.selected_gun, None);
        assert_eq!(app.dialog, Dialog::None);
    }

    #[test]
    fn test_removes_first_occurrence_of_selected_text() {
        let (mut app, name) = common::app_with_rifles();
        app.apply_dialog(DialogResult::AddGun("ak47+grip".to_string()));
        app.apply_gun_event(GunListEvent::Clicked(2));

        app.apply_action(Action::RemoveGun);

        assert_eq!(common::guns_of(&app, &name), ["mp5", "ak47+grip"]);
    }

    #[test]
    fn test_stale_selection_index_warns_and_is_cleared() {
        let (mut app, name) = common::app_with_rifles();
        app.selected_gun = Some(5);

        app.apply_action(Action::RemoveGun);

        assert_eq!(common::guns_of(&app, &name), ["ak47+grip", "mp5"]);
        assert_eq!(app.selected_gun, None);
        assert_eq!(
            app.dialog,
            Dialog::notice("No Selection", "Please select a gun to remove.")
        );
    }
}

mod edit_gun {
    use super::*;

    #[test]
    fn test_double_click_selects_and_opens_prefilled_prompt() {
        let (mut app, _name) = common::app_with_rifles();

        app.apply_gun_event(GunListEvent::DoubleClicked(0));

        assert_eq!(app.selected_gun, Some(0));
        assert_eq!(
            app.dialog,
            Dialog::EditGun {
                index: 0,
                gun: "ak47+grip".to_string()
            }
        );
    }

    #[test]
    fn test_double_click_without_loadout_warns() {
        let mut app = common::create_test_app();

        app.apply_gun_event(GunListEvent::DoubleClicked(0));

        assert_eq!(
            app.dialog,
            Dialog::notice("No Loadout", "Please select a loadout first.")
        );
    }

    #[test]
    fn test_submitted_edit_replaces_gun_in_place() {
        let (mut app, name) = common::app_with_rifles();

        app.apply_dialog(DialogResult::EditGun {
            index: 0,
            gun: "m4a1+acog".to_string(),
        });

        assert_eq!(common::guns_of(&app, &name), ["m4a1+acog", "mp5"]);
        assert_eq!(app.selected_gun, None);
    }

    #[test]
    fn test_edit_past_end_reports_error() {
        let (mut app, name) = common::app_with_rifles();

        app.apply_dialog(DialogResult::EditGun {
            index: 9,
            gun: "m4a1".to_string(),
        });

        assert_eq!(common::guns_of(&app, &name), ["ak47+grip", "mp5"]);
        assert!(matches!(
            app.dialog,
            Dialog::Notice { ref title, .. } if title == "Error"
        ));
    }
}

mod copy_loadout {
    use super::*;

    #[test]
    fn test_without_loadout_warns() {
        let mut app = common::create_test_app();

        app.apply_action(Action::CopyLoadout);

        assert_eq!(
            app.dialog,
            Dialog::notice("No Loadout", "Please select a loadout first.")
        );
    }
}
