//! Sign-up form demo: one gatekeeper, several submissions

use gatekeeper::{
    AvoidScriptTag, Custom, GateKeeper, GateKeeperConfig, HtmlRenderer, Limitation,
    MessageSwitcher, Presence, Prohibition, Regexp, Render, TextRenderer,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

struct SignUp {
    username: String,
    email: String,
    age: u32,
}

fn sign_up(username: &str, email: &str, age: u32) -> SignUp {
    SignUp {
        username: username.to_string(),
        email: email.to_string(),
        age,
    }
}

fn sign_up_gatekeeper() -> Result<GateKeeper<SignUp>, Box<dyn std::error::Error>> {
    let gk = GateKeeper::new()
        .rule(Regexp::new(
            |s: &SignUp| s.email.as_str(),
            r"^([^@\s]+)@((?:[-a-z0-9]+\.)+[a-z]{2,})$",
            "Email",
            "Must be a valid email",
        )?)
        .rule(Presence::new(
            |s: &SignUp| s.username.as_str(),
            "Username",
            "Username can not be blank",
        ))
        .rule(Limitation::new(
            |s: &SignUp| s.username.as_str(),
            0,
            10,
            "Username",
            "Username can not be too long",
        ))
        .rule(Prohibition::new(
            |s: &SignUp| s.username.as_str(),
            10,
            20,
            "Username",
            "Username must less than 10 or more than 20",
        ))
        .rule(AvoidScriptTag::new(
            |s: &SignUp| s.username.as_str(),
            "Username",
            "Username can contains html script tag",
        ))
        .rule(Custom::new(
            |s: &SignUp| s.age >= 18,
            "Age",
            "You must be a grown man",
        ))
        .rule(MessageSwitcher::new(
            |s: &SignUp| {
                if s.username == "Kioshi" {
                    "You are in blacklist, lol :D".to_string()
                } else {
                    String::new()
                }
            },
            "Username",
        ));
    Ok(gk)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("gatekeeper demo");
    println!("===============\n");

    let gk = sign_up_gatekeeper()?;
    println!("{:?}\n", gk);

    let submissions = [
        sign_up("", "fake", 10),
        sign_up("i like to move it move it", "kiss@therain.com", 30),
        sign_up("<script>alert(1)</script>", "kiss@therain.com", 30),
        sign_up("Kioshi", "kioshi@avatar.com", 30),
        sign_up("Roku", "roku@avatar.com", 30),
    ];

    for submission in &submissions {
        let validation = gk.validate(submission);
        if validation.has_error() {
            println!("'{}' rejected:", submission.username);
            print!("{}", TextRenderer.render(&validation));
            println!("{}\n", HtmlRenderer::new().render(&validation));
        } else {
            println!("'{}' accepted\n", submission.username);
        }
    }

    // The same checks, declared as data for JSON payloads
    let rules = GateKeeperConfig::from_json_str(
        r#"{"rules": [
            {"kind": "presence", "field": "Username", "message": "Username can not be blank"},
            {"kind": "limitation", "field": "Username", "min": 0, "max": 10, "message": "Username can not be too long"}
        ]}"#,
    )?
    .build()?;
    let validation = rules.validate(&json!({ "Username": "" }));
    println!("JSON payload: {}", validation.to_json());

    Ok(())
}
