use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use rstest::rstest;

use folio::{
    core::state::{nav::Section, AppState},
    domain::content::{JourneyTab, ALL_CATEGORIES},
    integration::runtime::Runtime,
    RawMsg,
};

fn key(code: KeyCode) -> RawMsg {
    RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(runtime: &mut Runtime, codes: &[KeyCode]) {
    for code in codes {
        runtime.send_raw_msg(key(*code));
    }
    runtime.run_update_cycle();
}

fn runtime_at(section: Section) -> Runtime {
    let mut state = AppState::default();
    state.nav.current = section;
    Runtime::new(state)
}

#[rstest]
#[case(KeyCode::Char('1'), Section::Home)]
#[case(KeyCode::Char('4'), Section::Services)]
#[case(KeyCode::Char('8'), Section::Contact)]
fn test_digits_jump_to_sections(#[case] code: KeyCode, #[case] expected: Section) {
    let mut runtime = runtime_at(Section::About);
    press(&mut runtime, &[code]);
    assert_eq!(runtime.state().nav.current, expected);
}

#[test]
fn test_section_cycling_wraps() {
    let mut runtime = runtime_at(Section::Contact);
    press(&mut runtime, &[KeyCode::Tab]);
    assert_eq!(runtime.state().nav.current, Section::Home);
    press(&mut runtime, &[KeyCode::BackTab]);
    assert_eq!(runtime.state().nav.current, Section::Contact);
}

#[test]
fn test_testimonial_carousel_wraps_both_ways() {
    let mut runtime = runtime_at(Section::Testimonials);
    let len = runtime.state().testimonials.len();
    assert!(len > 1);

    press(&mut runtime, &[KeyCode::Left]);
    assert_eq!(runtime.state().testimonials.index(), len - 1);

    press(&mut runtime, &[KeyCode::Right]);
    assert_eq!(runtime.state().testimonials.index(), 0);

    let rights = vec![KeyCode::Right; len];
    press(&mut runtime, &rights);
    assert_eq!(runtime.state().testimonials.index(), 0);
}

#[test]
fn test_journey_tabs_wrap() {
    let mut runtime = runtime_at(Section::Journey);
    assert_eq!(runtime.state().journey.tab, JourneyTab::Education);
    press(&mut runtime, &[KeyCode::Left]);
    assert_eq!(runtime.state().journey.tab, JourneyTab::Certifications);
    press(&mut runtime, &[KeyCode::Right, KeyCode::Right]);
    assert_eq!(runtime.state().journey.tab, JourneyTab::Experience);
}

#[test]
fn test_project_filter_shows_only_matching_projects() {
    let mut runtime = runtime_at(Section::Projects);
    let content = runtime.state().content.clone();
    assert_eq!(runtime.state().projects.active_category(), ALL_CATEGORIES);
    assert_eq!(
        runtime.state().projects.visible(&content).len(),
        content.projects.len()
    );

    press(&mut runtime, &[KeyCode::Right]);
    let category = runtime.state().projects.active_category().to_string();
    assert_ne!(category, ALL_CATEGORIES);
    let visible = runtime.state().projects.visible(&content);
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|p| p.category == category));
    let expected = content
        .projects
        .iter()
        .filter(|p| p.category == category)
        .count();
    assert_eq!(visible.len(), expected);
}

#[test]
fn test_project_details_open_and_close() {
    let mut runtime = runtime_at(Section::Projects);
    let content = runtime.state().content.clone();

    press(&mut runtime, &[KeyCode::Down, KeyCode::Enter]);
    let selected = runtime
        .state()
        .projects
        .selected_project(&content)
        .map(|p| p.id);
    assert!(selected.is_some());
    assert_eq!(runtime.state().projects.modal, selected);

    // Navigation keys are captured while the modal is open
    press(&mut runtime, &[KeyCode::Tab, KeyCode::Right]);
    assert_eq!(runtime.state().nav.current, Section::Projects);
    assert_eq!(runtime.state().projects.modal, selected);

    press(&mut runtime, &[KeyCode::Esc]);
    assert!(!runtime.state().projects.is_modal_open());
}

#[test]
fn test_changing_filter_resets_selection() {
    let mut runtime = runtime_at(Section::Projects);
    press(&mut runtime, &[KeyCode::Down, KeyCode::Down]);
    assert!(runtime.state().projects.selected > 0);

    press(&mut runtime, &[KeyCode::Right]);
    assert_eq!(runtime.state().projects.selected, 0);
}
