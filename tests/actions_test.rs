//! Handler tests
//!
//! Drives every window event against a fake engine, notifier and file
//! picker, and checks the engine calls and dialogs each one produces.

use regex::Regex;
use stasyan::actions::{self, UiEvent};
use stasyan::notify::{Notifier, Severity};
use stasyan::picker::FilePicker;
use stasyan::speech::{SpeechEngine, Voice};
use stasyan::state::config::Config;
use stasyan::state::AppContext;
use stasyan::{Result, StasyanError};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
enum EngineCall {
    SetVoice(String),
    SetRate(u8),
    SetVolume(u8),
    Speak(String),
    Save(String, PathBuf),
}

#[derive(Default)]
struct Recorder {
    engine: Vec<EngineCall>,
    dialogs: Vec<(String, String, Severity)>,
}

type Shared = Rc<RefCell<Recorder>>;

struct FakeEngine {
    voices: Vec<Voice>,
    fail_speech: bool,
    log: Shared,
}

impl SpeechEngine for FakeEngine {
    fn backend_name(&self) -> &'static str {
        "fake"
    }

    fn voices(&mut self) -> Result<Vec<Voice>> {
        Ok(self.voices.clone())
    }

    fn set_voice(&mut self, voice: &Voice) -> Result<()> {
        self.log
            .borrow_mut()
            .engine
            .push(EngineCall::SetVoice(voice.id.clone()));
        Ok(())
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        self.log.borrow_mut().engine.push(EngineCall::SetRate(rate));
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        self.log
            .borrow_mut()
            .engine
            .push(EngineCall::SetVolume(volume));
        Ok(())
    }

    fn speak_and_wait(&mut self, text: &str) -> Result<()> {
        if self.fail_speech {
            return Err(StasyanError::Speech("audio device busy".to_string()));
        }
        self.log
            .borrow_mut()
            .engine
            .push(EngineCall::Speak(text.to_string()));
        Ok(())
    }

    fn save_to_file(&mut self, text: &str, path: &Path) -> Result<()> {
        fs::write(path, b"RIFF")?;
        self.log
            .borrow_mut()
            .engine
            .push(EngineCall::Save(text.to_string(), path.to_path_buf()));
        Ok(())
    }
}

struct FakeNotifier(Shared);

impl Notifier for FakeNotifier {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        self.0
            .borrow_mut()
            .dialogs
            .push((title.to_string(), message.to_string(), severity));
    }
}

struct FakePicker(Option<PathBuf>);

impl FilePicker for FakePicker {
    fn pick_text_file(&mut self) -> Option<PathBuf> {
        self.0.clone()
    }
}

fn voices() -> Vec<Voice> {
    vec![
        Voice::new("af", "Afrikaans"),
        Voice::new("en-gb", "English"),
        Voice::new("ru", "Russian"),
        Voice::new("en-us", "English"),
    ]
}

struct Harness {
    ctx: AppContext,
    log: Shared,
    out: TempDir,
}

impl Harness {
    fn new(voices: Vec<Voice>, picked: Option<PathBuf>) -> Self {
        Self::build(voices, picked, false, "")
    }

    fn build(voices: Vec<Voice>, picked: Option<PathBuf>, fail_speech: bool, extra: &str) -> Self {
        let out = TempDir::new().unwrap();
        let config = Config::parse(&format!(
            "[output]\ndirectory = {}\n{}",
            out.path().join("Saves").display(),
            extra
        ))
        .unwrap();

        let log = Shared::default();
        let engine = FakeEngine {
            voices,
            fail_speech,
            log: log.clone(),
        };
        let ctx = AppContext::with_parts(
            config,
            Box::new(engine),
            Box::new(FakeNotifier(log.clone())),
            Box::new(FakePicker(picked)),
        )
        .unwrap();

        // Startup calls (default voice) are checked in their own test
        log.borrow_mut().engine.clear();

        Self { ctx, log, out }
    }

    fn engine_calls(&self) -> Vec<EngineCall> {
        self.log.borrow().engine.clone()
    }

    fn dialogs(&self) -> Vec<(String, String, Severity)> {
        self.log.borrow().dialogs.clone()
    }

    fn saves_dir(&self) -> PathBuf {
        self.out.path().join("Saves")
    }
}

#[test]
fn test_listen_empty_text_warns_once() {
    let mut h = Harness::new(voices(), None);

    actions::listen(&mut h.ctx).unwrap();

    assert!(h.engine_calls().is_empty());
    let dialogs = h.dialogs();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].2, Severity::Warning);
}

#[test]
fn test_save_empty_text_warns_once() {
    let mut h = Harness::new(voices(), None);

    let saved = actions::save(&mut h.ctx).unwrap();

    assert!(saved.is_none());
    assert!(h.engine_calls().is_empty());
    assert!(!h.saves_dir().exists());
    let dialogs = h.dialogs();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].2, Severity::Warning);
}

#[test]
fn test_whitespace_text_is_spoken() {
    let mut h = Harness::new(voices(), None);
    h.ctx.text.replace("  ".to_string());

    actions::listen(&mut h.ctx).unwrap();

    assert_eq!(h.engine_calls(), vec![EngineCall::Speak("  ".to_string())]);
    assert!(h.dialogs().is_empty());
}

#[test]
fn test_listen_speaks_buffer() {
    let mut h = Harness::new(voices(), None);
    h.ctx.text.as_mut_string().push_str("Привет, мир");

    actions::listen(&mut h.ctx).unwrap();

    assert_eq!(
        h.engine_calls(),
        vec![EngineCall::Speak("Привет, мир".to_string())]
    );
    assert!(h.dialogs().is_empty());
}

#[test]
fn test_save_writes_one_timestamped_mp3() {
    let mut h = Harness::new(voices(), None);
    h.ctx.text.replace("Save me".to_string());

    let path = actions::save(&mut h.ctx).unwrap().expect("file should be saved");

    let entries: Vec<PathBuf> = fs::read_dir(h.saves_dir())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(entries, vec![path.clone()]);

    let name = path.file_name().unwrap().to_str().unwrap();
    let pattern = Regex::new(r"^Writed Voice  \d{4}-\d{2}-\d{2}-\d{2}\.\d{2}\.\d{2}\.mp3$").unwrap();
    assert!(pattern.is_match(name), "unexpected file name {:?}", name);
    assert_eq!(path.extension().unwrap(), "mp3");

    assert_eq!(
        h.engine_calls(),
        vec![EngineCall::Save("Save me".to_string(), path.clone())]
    );

    let dialogs = h.dialogs();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].2, Severity::Information);
    assert!(dialogs[0].1.contains(name));
    // The output folder is an absolute temp path, not next to the program
    assert!(dialogs[0].1.contains(&h.saves_dir().display().to_string()));
    assert!(!dialogs[0].1.contains("program directory"));
}

#[test]
fn test_select_known_voice() {
    let mut h = Harness::new(voices(), None);

    let voice = actions::select_voice(&mut h.ctx, "Russian").unwrap();

    assert_eq!(voice, Some(Voice::new("ru", "Russian")));
    assert_eq!(h.engine_calls(), vec![EngineCall::SetVoice("ru".to_string())]);
    assert_eq!(h.ctx.active_voice.as_ref().unwrap().id, "ru");

    let dialogs = h.dialogs();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].2, Severity::Information);
    assert!(dialogs[0].1.contains("Russian"));
}

#[test]
fn test_select_duplicate_name_uses_first_match() {
    let mut h = Harness::new(voices(), None);

    actions::select_voice(&mut h.ctx, "English").unwrap();

    assert_eq!(
        h.engine_calls(),
        vec![EngineCall::SetVoice("en-gb".to_string())]
    );
}

#[test]
fn test_select_unknown_voice_is_noop() {
    let mut h = Harness::new(voices(), None);
    let before = h.ctx.active_voice.clone();

    let voice = actions::select_voice(&mut h.ctx, "Klingon").unwrap();

    assert!(voice.is_none());
    assert!(h.engine_calls().is_empty());
    assert!(h.dialogs().is_empty());
    assert_eq!(h.ctx.active_voice, before);
}

#[test]
fn test_load_text_replaces_buffer_verbatim() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("story.txt");
    let content = "Первая строка\r\nsecond line\n\n  trailing  \n";
    fs::write(&file, content).unwrap();

    let mut h = Harness::new(voices(), Some(file));
    h.ctx.text.replace("old content that must disappear".to_string());

    assert!(actions::load_text(&mut h.ctx).unwrap());
    assert_eq!(h.ctx.text.contents(), content);
    assert!(h.dialogs().is_empty());
}

#[test]
fn test_load_text_cancelled_keeps_buffer() {
    let mut h = Harness::new(voices(), None);
    h.ctx.text.replace("keep me".to_string());

    assert!(!actions::load_text(&mut h.ctx).unwrap());
    assert_eq!(h.ctx.text.contents(), "keep me");
}

#[test]
fn test_load_text_invalid_utf8_keeps_buffer() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("binary.txt");
    fs::write(&file, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let mut h = Harness::new(voices(), Some(file));
    h.ctx.text.replace("keep me".to_string());

    let err = actions::load_text(&mut h.ctx).unwrap_err();
    assert!(matches!(err, StasyanError::Utf8(_)));
    assert_eq!(h.ctx.text.contents(), "keep me");
}

#[test]
fn test_catalog_keeps_engine_order() {
    let h = Harness::new(voices(), None);
    assert_eq!(
        h.ctx.catalog.names(),
        vec!["Afrikaans", "English", "Russian", "English"]
    );
}

#[test]
fn test_empty_catalog() {
    let mut h = Harness::new(Vec::new(), None);
    assert!(h.ctx.catalog.is_empty());
    assert!(h.ctx.active_voice.is_none());
    assert!(actions::select_voice(&mut h.ctx, "Russian").unwrap().is_none());
}

#[test]
fn test_startup_applies_settings_and_default_voice() {
    let log = Shared::default();
    let engine = FakeEngine {
        voices: voices(),
        fail_speech: false,
        log: log.clone(),
    };
    let config = Config::parse("[speech]\nrate = 60\nvolume = 90\n").unwrap();

    let ctx = AppContext::with_parts(
        config,
        Box::new(engine),
        Box::new(FakeNotifier(log.clone())),
        Box::new(FakePicker(None)),
    )
    .unwrap();

    assert_eq!(
        log.borrow().engine,
        vec![
            EngineCall::SetRate(60),
            EngineCall::SetVolume(90),
            EngineCall::SetVoice("ru".to_string()),
        ]
    );
    assert_eq!(ctx.active_voice.unwrap().name, "Russian");
    assert!(log.borrow().dialogs.is_empty());
}

#[test]
fn test_missing_default_voice_keeps_engine_default() {
    let h = Harness::build(voices(), None, false, "[speech]\ndefault_voice = de\n");
    assert!(h.ctx.active_voice.is_none());
}

#[test]
fn test_handle_routes_events() {
    let mut h = Harness::new(voices(), None);
    h.ctx.text.replace("hello".to_string());

    actions::handle(&mut h.ctx, UiEvent::VoiceClicked("Afrikaans".to_string())).unwrap();
    actions::handle(&mut h.ctx, UiEvent::Listen).unwrap();
    actions::handle(&mut h.ctx, UiEvent::LoadText).unwrap();

    assert_eq!(
        h.engine_calls(),
        vec![
            EngineCall::SetVoice("af".to_string()),
            EngineCall::Speak("hello".to_string()),
        ]
    );
}

#[test]
fn test_dispatch_reports_engine_failure() {
    let mut h = Harness::build(voices(), None, true, "");
    h.ctx.text.replace("hello".to_string());

    actions::dispatch(&mut h.ctx, UiEvent::Listen);

    let dialogs = h.dialogs();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].2, Severity::Critical);
    assert!(dialogs[0].1.contains("audio device busy"));
}
