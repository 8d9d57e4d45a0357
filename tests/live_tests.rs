//! Tests against the real service. Run with:
//! `CLOUDFLARE_API_KEY=... CLOUDFLARE_EMAIL=... cargo test --test live_tests -- --ignored`

use anyhow::{bail, Context, Result};
use cloudflare_client::{CloudFlare, Response, UserLookup, DEFAULT_STATS_INTERVAL};

fn env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{} is not set", name))
}

fn client_handle() -> Result<CloudFlare> {
    Ok(CloudFlare::client(env("CLOUDFLARE_API_KEY")?, env("CLOUDFLARE_EMAIL")?)?)
}

fn host_handle() -> Result<CloudFlare> {
    Ok(CloudFlare::host(env("CLOUDFLARE_HOST_KEY")?)?)
}

#[test]
#[ignore]
fn test_stats() -> Result<()> {
    let cf = client_handle()?;
    let zone = env("CLOUDFLARE_ZONE")?;

    let value = cf.stats(&zone, DEFAULT_STATS_INTERVAL)?;
    let response = Response::from_value(value)?;
    if !response.is_success() {
        bail!("stats failed: {:?} ({:?})", response.msg, response.error_code());
    }

    println!("Stats test passed: {:?}", response.get("result/objs/0"));
    Ok(())
}

#[test]
#[ignore]
fn test_zone_check() -> Result<()> {
    let cf = client_handle()?;
    let zone = env("CLOUDFLARE_ZONE")?;

    let response = Response::from_value(cf.zone_check(vec![zone.as_str()])?)?.check()?;
    let zone_id = response.get(&format!("zones/{}", zone));
    assert!(zone_id.is_some(), "expected {} in zone_check response", zone);

    println!("Zone check test passed: {:?}", zone_id);
    Ok(())
}

#[test]
#[ignore]
fn test_bad_credentials() -> Result<()> {
    let cf = CloudFlare::client("invalid-key", "nobody@example.com")?;

    let value = cf.threat_score("192.0.2.1")?;
    let error = Response::from_value(value)?
        .check()
        .expect_err("invalid credentials must be rejected");

    println!("Bad credentials test passed: {}", error);
    Ok(())
}

#[test]
#[ignore]
fn test_user_lookup() -> Result<()> {
    let cf = host_handle()?;
    let email = env("CLOUDFLARE_LOOKUP_EMAIL")?;

    let response = Response::from_value(cf.user_lookup(UserLookup::Email(email))?)?.check()?;
    assert!(response.get("user_exists").is_some(), "expected user_exists in response");

    println!("User lookup test passed: {:?}", response.response);
    Ok(())
}
