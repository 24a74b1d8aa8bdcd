use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nullable::prelude::*;

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("invalid RUST_LOG filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}

fn find_user(id: i32) -> NullableString {
    match id {
        1 => create_string("alice".to_owned()),
        2 => create_string(String::new()),
        _ => create_null_string(),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!(mode = %build_mode(), "nullable demo");

    let answer = present(42);
    println!("{answer}: has_value={}", answer.has_value());
    println!("value = {}", answer.value()?);

    let missing = absent::<i32>();
    println!("{missing}: is_absent={}", missing.is_absent());
    if let Err(e) = missing.value() {
        println!("checked access failed: {e}");
    }

    let chained = present(10).map(|x| x * 2).map(|x| format!("value:{x}"));
    println!("map chain -> {chained}");

    for x in [10, 3] {
        let kept = present(x).flat_map(|v| if v > 5 { present(v) } else { absent() });
        println!("flat_map({x}) -> {kept}");
    }

    for id in 1..=3 {
        let user = find_user(id);
        let shown = user.as_ref().map(|name| format!("{name:?}"));
        println!(
            "user {id}: {} (present={})",
            shown.get_or_else_with(|| "<unknown>".to_owned()),
            user.has_value()
        );
    }

    let flags = [create_bool(false), create_null_bool(), create_bool(true)];
    let set = flags.iter().filter(|f| f.has_value()).count();
    println!("{set} of {} flags set", flags.len());

    let ratio = create_double(0.5).map(|r| r * 100.0);
    println!("ratio = {}%", get_double_value(ratio)?);

    Ok(())
}
