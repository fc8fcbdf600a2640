use keycalc_core::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn press(session: &mut Session<impl KeyValueStore>, keys: &str) {
    for ch in keys.chars() {
        let key = Key::from_char(ch).unwrap_or_else(|| panic!("no key for {ch:?}"));
        match session.press_key(key) {
            Ok(_) | Err(CalculationError::DividedByZero) => {}
        }
    }
}

#[test]
fn test_full_calculation() {
    let mut session = Session::new(MemoryStore::new());
    press(&mut session, "10÷2+3");
    assert_eq!(session.press_equals(), Ok(Some(8.0)));
    assert_eq!(session.display(), "8");
    assert_eq!(session.state(), InputState::AwaitingFirstOperand);
    assert!(session.expression().is_empty());

    assert_eq!(
        session.history(),
        vec![HistoryEntry {
            expression: "10.0 ÷ 2.0 + 3.0".to_string(),
            result: "8.0".to_string(),
        }]
    );
}

#[test]
fn test_decimal_operands() {
    let mut session = Session::new(MemoryStore::new());
    press(&mut session, "1.5×.5=");
    assert_eq!(session.display(), "0.75");
    assert_eq!(session.records()[0].result(), 0.75);
}

#[test]
fn test_result_is_rounded_on_display_only() {
    let mut session = Session::new(MemoryStore::new());
    press(&mut session, "2÷3=");
    assert_eq!(session.display(), "0.667");
    assert_eq!(session.records()[0].result(), 2.0 / 3.0);
}

#[test]
fn test_equals_without_operator() {
    let mut session = Session::new(MemoryStore::new());
    press(&mut session, "7=");
    assert_eq!(session.display(), "7");
    assert_eq!(session.history()[0].expression, "7.0");
}

#[test]
fn test_repeated_operator_uses_zero_operand() {
    let mut session = Session::new(MemoryStore::new());
    press(&mut session, "5+×3=");
    // 5 + 0 × 3
    assert_eq!(session.display(), "15");
    assert_eq!(session.history()[0].expression, "5.0 + 0.0 × 3.0");
}

#[test]
fn test_divide_by_zero_records_nothing() {
    let mut session = Session::new(MemoryStore::new());
    press(&mut session, "9÷0");
    assert_eq!(
        session.press_equals(),
        Err(CalculationError::DividedByZero)
    );
    assert_eq!(session.display(), "Error");
    assert!(session.records().is_empty());
    assert!(session
        .history_store()
        .store()
        .get(session.history_store().key())
        .unwrap()
        .is_none());
}

#[test]
fn test_clear_discards_expression() {
    let mut session = Session::new(MemoryStore::new());
    press(&mut session, "4+5");
    session.press_clear();
    assert_eq!(session.display(), "0");
    assert!(session.expression().is_empty());

    press(&mut session, "6=");
    assert_eq!(session.display(), "6");
    assert_eq!(session.history()[0].expression, "6.0");
}

#[test]
fn test_history_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let mut session = Session::new(FileStore::open(&path).unwrap());
        press(&mut session, "1+1=");
        press(&mut session, "3×3=");
    }

    let mut session = Session::new(FileStore::open(&path).unwrap());
    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].expression, "1.0 + 1.0");
    assert_eq!(history[1].result, "9.0");

    press(&mut session, "2−5=");
    assert_eq!(session.display(), "-3");

    let reopened = Session::new(FileStore::open(&path).unwrap());
    assert_eq!(reopened.records().len(), 3);
    assert_eq!(reopened.records()[2].result(), -3.0);
}

#[test]
fn test_custom_history_key() {
    let config = CalculatorConfig {
        history_key: "calc.history".to_string(),
        ..CalculatorConfig::default()
    };
    let mut session = Session::with_config(MemoryStore::new(), &config);
    press(&mut session, "1+2=");

    let store = session.history_store().store();
    assert!(store.get("calc.history").unwrap().is_some());
    assert!(store.get("calculationHistoryKey").unwrap().is_none());
}

#[test]
fn test_corrupt_history_starts_empty() {
    let mut backing = MemoryStore::new();
    backing
        .set("calculationHistoryKey", "[{\"broken\":true}]".to_string())
        .unwrap();

    let mut session = Session::new(backing);
    assert!(session.history().is_empty());

    // The next calculation overwrites the corrupt slot
    press(&mut session, "2×2=");
    let reloaded = HistoryStore::new(session.history_store().store().clone()).load();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].result(), 4.0);
}

#[test]
fn test_overflow_does_not_block_later_saves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let mut session = Session::new(FileStore::open(&path).unwrap());
        press(&mut session, &"9".repeat(400));
        assert_eq!(session.press_equals(), Ok(Some(f64::INFINITY)));
        assert_eq!(session.display(), "inf");
        assert!(session.records().is_empty());

        press(&mut session, "C2+3=");
        assert_eq!(session.display(), "5");
        assert_eq!(session.records().len(), 1);
    }

    let reopened = Session::new(FileStore::open(&path).unwrap());
    assert_eq!(reopened.records().len(), 1);
    assert_eq!(reopened.history()[0].expression, "2.0 + 3.0");
}

#[test]
fn test_overflowing_product_is_not_recorded() {
    let mut session = Session::new(MemoryStore::new());
    let big = format!("1{}", "0".repeat(200));
    press(&mut session, &format!("{big}×{big}="));
    assert_eq!(session.display(), "inf");
    assert!(session.records().is_empty());

    press(&mut session, "4÷2=");
    assert_eq!(session.records().len(), 1);
    let saved = HistoryStore::new(session.history_store().store().clone()).load();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].result(), 2.0);
}
