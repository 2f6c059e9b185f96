use super::*;
use crate::text::font::FontPreference;

fn config_in(dir: &str, targets: Vec<OutputTarget>) -> RenderConfig {
    let out_dir = PathBuf::from("target").join(dir);
    let _ = std::fs::remove_dir_all(&out_dir);
    RenderConfig {
        out_dir,
        font: FontPreference::Builtin,
        targets,
    }
}

#[test]
fn creates_missing_output_dir_and_reports_each_file() {
    let cfg = config_in(
        "session_unit_seq",
        vec![
            OutputTarget::new("a", 40, 28),
            OutputTarget::new("b", 80, 56),
        ],
    );
    let seen = std::sync::Mutex::new(Vec::new());
    let out = generate_all_with(&cfg, SessionOpts::default(), |img| {
        seen.lock().unwrap().push(img.name.clone());
    })
    .unwrap();

    assert_eq!(seen.into_inner().unwrap(), vec!["a", "b"]);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].path, cfg.out_dir.join("b.png"));
    assert_eq!((out[1].width, out[1].height), (80, 56));
    assert!(out.iter().all(|g| g.path.is_file()));
}

#[test]
fn parallel_results_keep_target_order() {
    let cfg = config_in(
        "session_unit_par",
        vec![
            OutputTarget::new("one", 60, 42),
            OutputTarget::new("two", 30, 21),
            OutputTarget::new("three", 90, 63),
        ],
    );
    let opts = SessionOpts {
        parallel: true,
        threads: Some(2),
    };
    let out = generate_all_with(&cfg, opts, |_| {}).unwrap();
    let names: Vec<_> = out.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["one", "two", "three"]);
}

#[test]
fn invalid_config_writes_nothing() {
    let cfg = config_in("session_unit_invalid", vec![OutputTarget::new("x", 0, 0)]);
    assert!(generate_all(&cfg).is_err());
    assert!(!cfg.out_dir.exists());
}

#[test]
fn zero_threads_is_rejected() {
    assert!(matches!(
        build_thread_pool(Some(0)),
        Err(StoreartError::Validation(_))
    ));
}

#[test]
fn zero_threads_is_rejected_in_sequential_mode() {
    let cfg = config_in("session_unit_zero_threads", vec![OutputTarget::new("z", 40, 28)]);
    let opts = SessionOpts {
        parallel: false,
        threads: Some(0),
    };
    assert!(matches!(
        generate_all_with(&cfg, opts, |_| {}),
        Err(StoreartError::Validation(_))
    ));
    assert!(!cfg.out_dir.exists());
}
