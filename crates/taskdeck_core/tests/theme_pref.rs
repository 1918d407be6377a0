use taskdeck_core::snapshot::THEME_KEY;
use taskdeck_core::{InMemoryKvStore, KvStore, Theme, ThemeService};

#[test]
fn fresh_store_loads_light() {
    let kv = InMemoryKvStore::new();
    let themes = ThemeService::load(&kv).unwrap();
    assert_eq!(themes.theme(), Theme::Light);
    assert!(!themes.theme().is_dark());
}

#[test]
fn toggle_persists_and_reload_sees_it() {
    let kv = InMemoryKvStore::new();
    let mut themes = ThemeService::load(&kv).unwrap();

    assert_eq!(themes.toggle().unwrap(), Theme::Dark);
    assert_eq!(kv.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    let reloaded = ThemeService::load(&kv).unwrap();
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn toggle_twice_returns_the_original() {
    let kv = InMemoryKvStore::new();
    let mut themes = ThemeService::load(&kv).unwrap();
    let original = themes.theme();

    themes.toggle().unwrap();
    themes.toggle().unwrap();
    assert_eq!(themes.theme(), original);
}

#[test]
fn garbage_stored_theme_loads_light() {
    let kv = InMemoryKvStore::new();
    kv.set(THEME_KEY, "solarized").unwrap();
    let themes = ThemeService::load(&kv).unwrap();
    assert_eq!(themes.theme(), Theme::Light);
}
