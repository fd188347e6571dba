use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn finds_static_imports() -> Result<()> {
    let test = CliTest::with_dependencies(&[("express", "^4.18.2")])?;
    test.write_file(
        "src/app.js",
        "import express from 'express';\n\nconst app = express();\n",
    )?;

    let (code, stdout, _) = run(&mut test.scan_command("express"));

    assert_eq!(code, 0);
    assert!(stdout.contains("There are 1 files in this project that depend on 'express@4.18.2'"));
    assert!(stdout.contains("app.js:1 → src/app.js"));

    Ok(())
}

#[test]
fn finds_requires_and_dynamic_imports() -> Result<()> {
    let test = CliTest::with_dependencies(&[("chalk", "5.3.0")])?;
    test.write_file("bin/cli.cjs", "const chalk = require('chalk');\n")?;
    test.write_file(
        "src/lazy.js",
        "export async function paint() {\n  const chalk = await import('chalk');\n}\n",
    )?;

    let (code, stdout, _) = run(&mut test.scan_command("chalk"));

    assert_eq!(code, 0);
    assert!(stdout.contains("cli.cjs:1 → bin/cli.cjs"));
    assert!(stdout.contains("lazy.js:2 → src/lazy.js"));

    Ok(())
}

#[test]
fn remaps_component_script_lines() -> Result<()> {
    let test = CliTest::with_dependencies(&[("vue", "^3.4.0")])?;
    test.write_file(
        "src/App.vue",
        "<script>\nimport Vue from 'vue';\n</script>\n\n<template>\n  <p>Hello</p>\n</template>\n",
    )?;

    let (code, stdout, _) = run(&mut test.scan_command("vue"));

    assert_eq!(code, 0);
    assert!(stdout.contains("App.vue:2 → src/App.vue"));

    Ok(())
}

#[test]
fn undeclared_dependency_fails_the_precheck() -> Result<()> {
    let test = CliTest::with_dependencies(&[("express", "^4.18.2")])?;
    test.write_file("src/app.js", "import leftPad from 'left-pad';\n")?;

    let (code, _, stderr) = run(&mut test.scan_command("left-pad"));

    assert_eq!(code, 1);
    assert!(stderr.contains("'left-pad' is not declared in this project's package.json"));

    Ok(())
}

#[test]
fn no_precheck_skips_the_manifest() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "import leftPad from 'left-pad';\n")?;

    let (code, stdout, _) = run(test.scan_command("left-pad").arg("--no-precheck"));

    assert_eq!(code, 0);
    assert!(stdout.contains("There are 1 files"));

    Ok(())
}

#[test]
fn missing_manifest_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "import express from 'express';\n")?;

    let (code, _, stderr) = run(&mut test.scan_command("express"));

    assert_eq!(code, 1);
    assert!(stderr.contains("not a Node.js project"));

    Ok(())
}

#[test]
fn strict_run_aborts_on_broken_files() -> Result<()> {
    let test = CliTest::with_dependencies(&[("express", "^4.18.2")])?;
    test.write_file("src/valid.js", "import express from 'express';\n")?;
    test.write_file("src/broken.js", "import import import;\n")?;

    let (code, _, stderr) = run(&mut test.scan_command("express"));

    assert_eq!(code, 1);
    assert!(stderr.contains("src/broken.js"));

    Ok(())
}

#[test]
fn silent_run_skips_broken_files() -> Result<()> {
    let test = CliTest::with_dependencies(&[("express", "^4.18.2")])?;
    test.write_file("src/valid.js", "import express from 'express';\n")?;
    test.write_file("src/broken.js", "import import import;\n")?;

    let (code, stdout, _) = run(test.scan_command("express").arg("--silent"));

    assert_eq!(code, 0);
    assert!(stdout.contains("There are 1 files"));
    assert!(stdout.contains("valid.js:1 → src/valid.js"));

    Ok(())
}

#[test]
fn glob_patterns_restrict_the_scan() -> Result<()> {
    let test = CliTest::with_dependencies(&[("express", "^4.18.2")])?;
    test.write_file("src/app.js", "import express from 'express';\n")?;
    test.write_file("bin/cli.js", "const express = require('express');\n")?;

    let (code, stdout, _) = run(test.scan_command("express").arg("src/**/*.js"));

    assert_eq!(code, 0);
    assert!(stdout.contains("There are 1 files"));
    assert!(stdout.contains("src/app.js"));
    assert!(!stdout.contains("bin/cli.js"));

    Ok(())
}

#[test]
fn table_output() -> Result<()> {
    let test = CliTest::with_dependencies(&[("express", "^4.18.2")])?;
    test.write_file("src/app.js", "import express from 'express';\n")?;

    let (code, stdout, _) = run(test.scan_command("express").arg("--table"));

    assert_eq!(code, 0);
    assert!(stdout.contains("| File name"));
    assert!(stdout.contains("| src/app.js"));

    Ok(())
}

#[test]
fn node_modules_are_pruned_from_walks() -> Result<()> {
    let test = CliTest::with_dependencies(&[("express", "^4.18.2")])?;
    test.write_file("src/app.js", "import express from 'express';\n")?;
    test.write_file(
        "node_modules/express/index.js",
        "module.exports = require('./lib/express');\n",
    )?;

    let (code, stdout, _) = run(&mut test.scan_command("express"));

    assert_eq!(code, 0);
    assert!(!stdout.contains("node_modules"));

    Ok(())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("--help"));

    assert_eq!(code, 0);
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("init"));
    assert!(stdout.contains("serve"));

    Ok(())
}
