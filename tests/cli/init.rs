use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn creates_the_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"));

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .depscanrc.json"));

    let config = test.read_file(".depscanrc.json")?;
    assert!(config.contains("\"precheck\": true"));

    Ok(())
}

#[test]
fn refuses_to_overwrite_an_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".depscanrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"));

    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"));

    Ok(())
}
