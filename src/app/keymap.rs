use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::sync::LazyLock;

use super::input::KeyAction;

macro_rules! keymap_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/keymap/default.keymap.json"
        ))
    };
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Save,
    Submit,
    Quit,
    FocusStep { delta: i32 },
    ClearStatus,
}

impl RawAction {
    fn into_action(self) -> KeyAction {
        match self {
            RawAction::Save => KeyAction::Save,
            RawAction::Submit => KeyAction::Submit,
            RawAction::Quit => KeyAction::Quit,
            RawAction::FocusStep { delta } => KeyAction::FocusStep(delta),
            RawAction::ClearStatus => KeyAction::ClearStatus,
        }
    }
}

pub(crate) struct KeyBinding {
    action: KeyAction,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    fn from_raw(raw: RawEntry) -> Result<Self, String> {
        if raw.combos.is_empty() {
            return Err(format!("keymap entry {} must declare combos", raw.id));
        }
        let combos = raw
            .combos
            .iter()
            .map(|combo| {
                KeyPattern::parse(combo)
                    .map_err(|err| format!("failed to parse combo '{combo}' for {}: {err}", raw.id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.as_str())
            .collect::<Vec<_>>()
            .join("/");
        Ok(Self {
            action: raw.action.into_action(),
            snippet: format!("{combos_display} {}", raw.description),
            combos,
        })
    }

    fn matches(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.combos
            .iter()
            .find(|pattern| pattern.matches(key))
            .map(|_| self.action)
    }
}

struct KeyPattern {
    matcher: CodeMatcher,
    required: KeyModifiers,
    allow_shift: bool,
    display: String,
}

impl KeyPattern {
    fn parse(spec: &str) -> Result<Self, String> {
        let display = spec.trim().to_string();
        let mut tokens = display
            .split('+')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must contain key".into());
        };
        let matcher = CodeMatcher::from_token(key_token)?;
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "shift" => required |= KeyModifiers::SHIFT,
                "alt" => required |= KeyModifiers::ALT,
                other => return Err(format!("unsupported modifier '{other}'")),
            }
        }
        let allow_shift = matcher.allows_extra_shift() && !required.contains(KeyModifiers::SHIFT);
        Ok(Self {
            matcher,
            required,
            allow_shift,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        if !self.matcher.matches(&key.code) || !key.modifiers.contains(self.required) {
            return false;
        }
        let extra = key.modifiers - self.required;
        if self.allow_shift {
            (extra - KeyModifiers::SHIFT).is_empty()
        } else {
            extra.is_empty()
        }
    }
}

enum CodeMatcher {
    Literal(KeyCode),
    Alpha(char),
}

impl CodeMatcher {
    fn from_token(token: &str) -> Result<Self, String> {
        let normalized = token.to_lowercase();
        let matcher = match normalized.as_str() {
            "tab" => CodeMatcher::Literal(KeyCode::Tab),
            "backtab" => CodeMatcher::Literal(KeyCode::BackTab),
            "enter" => CodeMatcher::Literal(KeyCode::Enter),
            "esc" | "escape" => CodeMatcher::Literal(KeyCode::Esc),
            "up" => CodeMatcher::Literal(KeyCode::Up),
            "down" => CodeMatcher::Literal(KeyCode::Down),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => CodeMatcher::Alpha(ch),
                    _ => return Err(format!("unsupported key '{token}'")),
                }
            }
        };
        Ok(matcher)
    }

    fn matches(&self, code: &KeyCode) -> bool {
        match (self, code) {
            (CodeMatcher::Literal(expected), actual) => actual == expected,
            (CodeMatcher::Alpha(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == *expected
            }
            _ => false,
        }
    }

    fn allows_extra_shift(&self) -> bool {
        matches!(
            self,
            CodeMatcher::Alpha(_)
                | CodeMatcher::Literal(KeyCode::BackTab)
                | CodeMatcher::Literal(KeyCode::Enter)
        )
    }
}

pub(crate) fn parse_keymap(source: &str) -> Result<Vec<KeyBinding>, String> {
    let raw_entries: Vec<RawEntry> =
        serde_json::from_str(source).map_err(|err| format!("invalid keymap: {err}"))?;
    raw_entries.into_iter().map(KeyBinding::from_raw).collect()
}

static KEYMAP: LazyLock<Vec<KeyBinding>> = LazyLock::new(|| {
    parse_keymap(keymap_source!())
        .unwrap_or_else(|err| panic!("keymap/default.keymap.json: {err}"))
});

pub(super) fn classify_key(key: &KeyEvent) -> Option<KeyAction> {
    KEYMAP.iter().find_map(|binding| binding.matches(key))
}

pub(crate) fn help_text() -> String {
    KEYMAP
        .iter()
        .map(|binding| binding.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_keymap_parses() {
        let bindings = parse_keymap(keymap_source!()).expect("bundled keymap");
        assert!(!bindings.is_empty());
    }

    #[test]
    fn help_lists_every_binding() {
        let help = help_text();
        assert!(help.contains("Ctrl+S save row"));
        assert!(help.contains("Ctrl+Q/Ctrl+C exit"));
    }

    #[test]
    fn rejects_unknown_modifier() {
        let source =
            r#"[{"id":"x","description":"x","action":{"kind":"save"},"combos":["Hyper+S"]}]"#;
        let err = parse_keymap(source).err().expect("error");
        assert!(err.contains("unsupported modifier"));
    }

    #[test]
    fn rejects_entry_without_combos() {
        let source = r#"[{"id":"x","description":"x","action":{"kind":"quit"},"combos":[]}]"#;
        assert!(parse_keymap(source).is_err());
    }
}
