//! End-to-end terminal sessions driven through the public API.

use chrono::NaiveDate;
use pandash_core::{
    Completion, Effect, Interpreter, LineKind, SessionState, SiteContent, StaticHost, Viewport,
};

const SITE: &str = r#"{
    "terminal": {
        "motd": ["PandaOS v2", "Type 'help' to begin."],
        "filesystem": {
            "/": ["home", "var"],
            "/home": ["nguyenpanda"],
            "/home/nguyenpanda": ["about.txt", "projects", "research"],
            "/home/nguyenpanda/projects": ["solver", "notes.md"],
            "/home/nguyenpanda/projects/solver": ["main.cpp"],
            "/home/nguyenpanda/research": ["paper.pdf"],
            "/var": ["www"],
            "/var/www": []
        }
    },
    "about": ["Hi, I'm <em>Panda</em>."],
    "projects": [
        { "title": "Solver", "description": "Sparse CG", "startDate": "2024-01-05" }
    ]
}"#;

fn start() -> (Interpreter, SessionState, StaticHost) {
    let content: SiteContent = serde_json::from_str(SITE).unwrap();
    let interp = Interpreter::new(content);
    let session = interp.new_session();
    let host = StaticHost {
        now: NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap(),
        viewport: Viewport::default(),
        anchors: vec!["research".to_string()],
    };
    (interp, session, host)
}

fn run(interp: &Interpreter, session: &mut SessionState, host: &StaticHost, line: &str) -> Vec<String> {
    interp
        .submit(session, line, host)
        .output
        .into_iter()
        .map(|l| l.text)
        .collect()
}

#[test]
fn defaults_fill_missing_identity() {
    let (interp, session, _) = start();
    assert_eq!(session.current_path(), "/home/nguyenpanda");
    assert_eq!(interp.prompt(&session), "guest@nguyenpanda:/home/nguyenpanda$ ");
    assert_eq!(interp.motd().len(), 2);
}

#[test]
fn navigate_and_list() {
    let (interp, mut session, host) = start();

    assert_eq!(
        run(&interp, &mut session, &host, "ls"),
        ["about.txt  projects  research"]
    );
    run(&interp, &mut session, &host, "cd projects/");
    assert_eq!(session.current_path(), "/home/nguyenpanda/projects");
    assert_eq!(
        run(&interp, &mut session, &host, "tree"),
        [
            "/home/nguyenpanda/projects",
            "├── solver",
            "│   └── main.cpp",
            "└── notes.md"
        ]
    );

    run(&interp, &mut session, &host, "cd ..");
    run(&interp, &mut session, &host, "cd ..");
    assert_eq!(session.current_path(), "/home");

    run(&interp, &mut session, &host, "cd");
    assert_eq!(run(&interp, &mut session, &host, "pwd"), ["/home/nguyenpanda"]);
}

#[test]
fn failed_cd_keeps_directory() {
    let (interp, mut session, host) = start();
    let out = run(&interp, &mut session, &host, "cd /nonexistent");
    assert_eq!(out, ["bash: cd: /nonexistent: No such file or directory"]);
    assert_eq!(session.current_path(), "/home/nguyenpanda");
}

#[test]
fn cd_falls_back_to_page_section() {
    let (interp, mut session, host) = start();
    run(&interp, &mut session, &host, "cd /var");
    let result = interp.submit(&mut session, "cd Research", &host);
    assert_eq!(result.output[0].text, "Navigating to /research...");
    assert_eq!(result.effect, Some(Effect::ScrollTo("research".into())));
    assert_eq!(session.current_path(), "/var");
}

#[test]
fn history_recall_round_trip() {
    let (interp, mut session, host) = start();
    for line in ["ls", "pwd", "whoami"] {
        interp.submit(&mut session, line, &host);
    }

    assert_eq!(session.recall_previous(), Some("whoami"));
    assert_eq!(session.recall_previous(), Some("pwd"));
    assert_eq!(session.recall_previous(), Some("ls"));
    assert_eq!(session.recall_previous(), Some("ls"));
    assert_eq!(session.recall_next(), Some("pwd"));
    assert_eq!(session.recall_next(), Some("whoami"));
    assert_eq!(session.recall_next(), None);

    // Submitting resets the cursor
    session.recall_previous();
    interp.submit(&mut session, "date", &host);
    assert_eq!(session.cursor(), None);
    assert_eq!(session.recall_previous(), Some("date"));
}

#[test]
fn tab_completion() {
    let (interp, _, _) = start();
    assert_eq!(interp.complete("he"), Completion::Single("help ".into()));
    assert_eq!(interp.complete("man pw"), Completion::Single("man pwd ".into()));
    assert_eq!(
        interp.complete("p"),
        Completion::Multiple(vec!["pwd".into(), "ping".into(), "projects".into()])
    );
    assert_eq!(interp.complete("xyz"), Completion::None);
}

#[test]
fn ping_runs_over_time() {
    let (interp, mut session, host) = start();
    let result = interp.submit(&mut session, "ping", &host);
    assert!(result.is_pending());
    assert_eq!(result.total_delay_ms(), 1500);
    let replies: Vec<_> = result
        .deferred
        .iter()
        .map(|batch| batch.lines[0].kind)
        .collect();
    assert_eq!(replies, [LineKind::Success; 3]);
}

#[test]
fn content_commands() {
    let (interp, mut session, host) = start();
    assert_eq!(
        run(&interp, &mut session, &host, "cat about.txt"),
        ["Hi, I'm Panda."]
    );
    assert_eq!(
        run(&interp, &mut session, &host, "projects")[1],
        "Solver | 5 Jan 2024 - Present"
    );
    assert_eq!(
        run(&interp, &mut session, &host, "contact"),
        ["=== Contact Information ==="]
    );
}

#[test]
fn exit_navigates_home() {
    let (interp, mut session, host) = start();
    let result = interp.submit(&mut session, "exit", &host);
    assert_eq!(result.effect, Some(Effect::Navigate("/".into())));
}
