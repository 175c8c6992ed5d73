//! Dispatcher output against builtin and custom profile data.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use termfolio_core::{Color, Dispatcher, Effect, Locale, ManualClock, ProfileData, Reply, Session};

const ACME: &str = r#"
[profile]
name = "Ada Lovelace"
role = "SRE"
company = "Acme"
location = "London"
email = "ada@example.com"
linkedin = "https://linkedin.com/in/ada"
github = "https://github.com/ada"
career_start = "2020-01-15"
bio = { en = "Engines and pagers.", es = "Motores y pagers." }

[[experience]]
status = "ACTIVE"
company = "Acme"
namespace = "banking"
period = "Oct 2025 - Present"
"#;

fn utc(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc)
}

fn builtin() -> Dispatcher {
    Dispatcher::new(Arc::new(ProfileData::builtin()), "guest")
}

fn session_at(now: &str) -> Session {
    Session::new(Locale::En).with_clock(Arc::new(ManualClock::new(utc(now))))
}

fn text(dispatcher: &Dispatcher, session: &mut Session, line: &str) -> String {
    dispatcher.dispatch(line, session).plain_text()
}

fn line_after<'a>(out: &'a str, label: &str) -> &'a str {
    out.lines()
        .find_map(|line| line.split(label).nth(1))
        .map(str::trim)
        .unwrap_or_else(|| panic!("no line with {:?} in:\n{}", label, out))
}

#[test]
fn test_kubectl_get_pods_custom_experience() {
    let data = ProfileData::from_toml_str(ACME).unwrap();
    let dispatcher = Dispatcher::new(Arc::new(data), "guest");
    let mut session = Session::new(Locale::En);

    let out = text(&dispatcher, &mut session, "kubectl get pods");
    let rows: Vec<&str> = out.lines().filter(|line| !line.trim().is_empty()).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("NAME"));
    for needle in ["acme", "banking", "ACTIVE", "Oct 2025"] {
        assert!(rows[1].contains(needle), "{:?} missing from {:?}", needle, rows[1]);
    }
    assert!(!rows[1].contains("Present"));
}

#[test]
fn test_kubectl_default_resource_is_pods() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);
    assert_eq!(
        text(&dispatcher, &mut session, "kubectl get"),
        text(&dispatcher, &mut session, "kubectl get pods")
    );
}

#[test]
fn test_kubectl_status_colors() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);
    let reply = dispatcher.dispatch("kubectl get pods", &mut session);
    let style_of = |status: &str| {
        reply
            .lines
            .iter()
            .flat_map(|line| &line.spans)
            .find(|span| span.text.trim() == status)
            .map(|span| span.style)
            .unwrap()
    };
    assert_eq!(style_of("ACTIVE").color, Some(Color::Green));
    assert_eq!(style_of("STABLE").color, Some(Color::Cyan));
    assert!(style_of("LEGACY").dim);
}

#[test]
fn test_kubectl_namespaces_and_services() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);

    let ns = text(&dispatcher, &mut session, "kubectl get ns");
    assert!(ns.lines().any(|line| line.starts_with("banking") && line.ends_with("Active")));
    assert!(ns.lines().any(|line| line.starts_with("startup") && line.ends_with("Terminated")));

    let svc = text(&dispatcher, &mut session, "kubectl get services");
    assert!(svc.contains("LoadBalancer"));
    assert!(svc.contains("10.0.0.42"));
}

#[test]
fn test_kubectl_errors_name_the_argument() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);
    assert_eq!(
        text(&dispatcher, &mut session, "kubectl get bogus"),
        "kubectl: unknown argument \"bogus\""
    );
    assert_eq!(
        text(&dispatcher, &mut session, "kubectl delete pods"),
        "kubectl: unknown argument \"delete\""
    );
    assert!(text(&dispatcher, &mut session, "kubectl describe pod nobody").contains("\"nobody\""));
    assert!(text(&dispatcher, &mut session, "kubectl").contains("Resources: pods, ns, svc"));
}

#[test]
fn test_kubectl_describe() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);

    let skills = text(&dispatcher, &mut session, "kubectl describe pod");
    assert!(skills.contains("Technical Skills"));

    let pod = text(&dispatcher, &mut session, "kubectl describe pod innfinit-spa");
    assert_eq!(line_after(&pod, "Role:"), "SRE Consultant");
    assert_eq!(line_after(&pod, "Namespace:"), "consulting");
    assert_eq!(line_after(&pod, "Period:"), "Nov 2022 - Oct 2025");
    assert!(pod.contains("Multi-region observability platforms."));
}

#[test]
fn test_docker() {
    let dispatcher = builtin();
    let mut session = session_at("2025-11-02T00:00:00Z");

    let ps = text(&dispatcher, &mut session, "docker");
    assert!(ps.contains("guest/portfolio:latest"));
    assert!(ps.contains("Up 3 years"));
    assert_eq!(ps, text(&dispatcher, &mut session, "docker ps"));

    let images = text(&dispatcher, &mut session, "docker images");
    assert!(images.contains("prom/prometheus"));
    assert!(images.contains("850MB"));

    assert_eq!(text(&dispatcher, &mut session, "docker rm"), "docker: unknown argument \"rm\"");
}

#[test]
fn test_neofetch_uptime_is_whole_days() {
    let dispatcher = builtin();

    let mut session = session_at("2022-11-01T00:00:00Z");
    let out = text(&dispatcher, &mut session, "neofetch");
    assert_eq!(line_after(&out, "Uptime:"), "0 days");

    let mut session = session_at("2023-11-01T23:59:00Z");
    let out = text(&dispatcher, &mut session, "neofetch");
    assert_eq!(line_after(&out, "Uptime:"), "365 days");
    assert!(out.contains("Fabián Muñoz V."));
}

#[test]
fn test_neofetch_before_career_start_is_zero() {
    let dispatcher = builtin();
    let mut session = session_at("2021-01-01T00:00:00Z");
    let out = text(&dispatcher, &mut session, "neofetch");
    assert_eq!(line_after(&out, "Uptime:"), "0 days");
}

#[test]
fn test_skills_bars() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);
    let out = text(&dispatcher, &mut session, "skills");
    let datadog = out.lines().find(|line| line.contains("Datadog")).unwrap();
    assert_eq!(datadog.matches('█').count(), 19);
    assert_eq!(datadog.matches('░').count(), 1);
    assert!(datadog.ends_with("95%"));
    assert!(out.contains("Cloud & Infrastructure:"));
}

#[test]
fn test_cat_aliases() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);

    let readme = text(&dispatcher, &mut session, "cat README.md");
    assert!(readme.contains("# Fabián Muñoz V."));
    assert!(readme.contains("Golden Signals"));

    assert_eq!(
        text(&dispatcher, &mut session, "cat experience/"),
        text(&dispatcher, &mut session, "kubectl get pods")
    );
    assert_eq!(
        text(&dispatcher, &mut session, "cat contact.txt"),
        text(&dispatcher, &mut session, "contact")
    );
    assert_eq!(
        text(&dispatcher, &mut session, "cat certifications"),
        text(&dispatcher, &mut session, "certs")
    );
}

#[test]
fn test_cat_errors() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);
    assert_eq!(
        text(&dispatcher, &mut session, "cat secrets.txt"),
        "cat: secrets.txt: No such file or directory"
    );
    assert_eq!(text(&dispatcher, &mut session, "cat"), "Usage: cat <file>");
}

#[test]
fn test_ls_owner_is_prompt_user() {
    let dispatcher = Dispatcher::new(Arc::new(ProfileData::builtin()), "fabian");
    let mut session = Session::new(Locale::En);
    let out = text(&dispatcher, &mut session, "ls");
    assert!(out.contains("drwxr-xr-x  fabian  experience/"));
    assert!(out.contains("-rw-r--r--  fabian  contact.txt"));
}

#[test]
fn test_localized_sections() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::Es);
    assert!(text(&dispatcher, &mut session, "projects").contains("Proyectos Personales"));
    assert!(text(&dispatcher, &mut session, "contact").contains("Información de Contacto"));
    assert!(text(&dispatcher, &mut session, "whoami").contains("3+ años"));
}

#[test]
fn test_clear_and_exit_effects() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);
    assert_eq!(dispatcher.dispatch("clear", &mut session), Reply::clear_screen());
    assert_eq!(dispatcher.dispatch("exit", &mut session).effect, Some(Effect::NavigateAway));
}

#[test]
fn test_matrix_uses_first_name() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);
    let out = text(&dispatcher, &mut session, "matrix");
    assert!(out.contains("Wake up, Fabián..."));
    assert!(out.contains("Follow the white rabbit."));
}

#[test]
fn test_blank_line_dispatches_nothing() {
    let dispatcher = builtin();
    let mut session = Session::new(Locale::En);
    assert_eq!(dispatcher.dispatch("   ", &mut session), Reply::empty());
}
