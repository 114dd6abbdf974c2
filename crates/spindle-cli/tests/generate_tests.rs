//! End-to-end tests for `spindle generate` in non-interactive mode.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write the full template tree the composition plan expects.
fn write_template_tree(root: &Path) {
    let write = |rel: &str, content: &str| {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    };

    // base
    write(
        "_bower.json",
        "{\"name\": \"{{projectName}}\", \"description\": \"{{projectDesc}}\"}",
    );
    write("_README.md", "# {{projectName}}\n");
    write("_eslintrc", "{\"rules\": {}}\n");
    write("_sasslint.js", "module.exports = {};\n");
    write("_webpack.config.js", "// bundling for {{projectName}}\n");
    write("gitignore", "node_modules\n");
    write("Gulpfile.js", "// tasks for {{projectName}}\n");
    write("Procfile", "web: node server.js\n");
    write("server.js", "require('express')();\n");
    write("mocks/api/things.json", "[]\n");

    // gulp
    write("_gulp_config.js", "module.exports = { name: '{{projectName}}' };\n");
    write("gulp/index.js", "// task loader\n");
    write("gulp/tasks/watch.js", "// watch task\n");

    // src
    write(
        "_package.json",
        "{\"name\": \"{{projectName}}\", \"version\": \"0.0.0\", \
         \"dependencies\": {\"express\": \"^4.13.0\"}}",
    );
    write("_src_app_index.jade", "title {{projectName}}\n");
    write("src/styles/main.scss", "body {}\n");
    write("src/app/boot.js", "// shared bootstrap\n");

    // angular
    write(
        "_package.angular.json",
        "{\"dependencies\": {\"angular\": \"^1.4.0\"}}",
    );
    write("_angular/src/app/app.js", "// angular app shell\n");
    write(
        "_angular_src/_src_app_components_data_data.js",
        "// data service for {{projectName}}\n",
    );
    write(
        "_angular_src/_src_app_components_navbar_navbar.js",
        "// navbar for {{projectName}}\n",
    );
    write("_angular_src/_src_app_index.js", "// entry\n");
    write("_angular_src/_src_app_main_main.js", "// main module\n");
    write(
        "_angular_src/_src_app_main_things_things.js",
        "// things module for {{projectName}}\n",
    );

    // react
    write(
        "_package.react.json",
        "{\"dependencies\": {\"react\": \"^16.0.0\"}}",
    );
    write("_react/src/app/app.js", "// react app shell\n");
    write("_react/src/lib/flux.js", "// tiny flux\n");

    // deploy
    write(
        "_package.deploy-gh.json",
        "{\"scripts\": {\"deploy\": \"gulp deploy-gh\"}}",
    );
    write("_gulp_tasks_deploy-gh.js", "// deploy task\n");
}

fn spindle() -> Command {
    Command::cargo_bin("spindle").unwrap()
}

#[test]
fn defaults_run_generates_a_react_project() {
    let temp = TempDir::new().unwrap();
    write_template_tree(&temp.path().join("templates"));

    spindle()
        .current_dir(temp.path())
        .args(["generate", "demo", "--template-dir", "templates", "--defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Everything generated just fine"));

    let dest = temp.path().join("demo");

    // rendered base file, project name derived from the destination
    let bower = fs::read_to_string(dest.join("bower.json")).unwrap();
    assert!(bower.contains("\"name\": \"demo\""), "bower.json: {bower}");

    // verbatim + re-rendered files
    assert_eq!(
        fs::read_to_string(dest.join(".gitignore")).unwrap(),
        "node_modules\n"
    );
    assert_eq!(
        fs::read_to_string(dest.join("Gulpfile.js")).unwrap(),
        "// tasks for demo\n"
    );

    // react tree, no angular components
    assert_eq!(
        fs::read_to_string(dest.join("src/app/app.js")).unwrap(),
        "// react app shell\n"
    );
    assert!(dest.join("src/lib/flux.js").exists());
    assert!(!dest.join("src/app/components/data/data.js").exists());

    // merged + finalized manifest
    let pkg: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dest.join("package.json")).unwrap()).unwrap();
    assert_eq!(pkg["name"], serde_json::json!("demo"));
    assert_eq!(pkg["dependencies"]["react"], serde_json::json!("^16.0.0"));
    assert!(pkg["dependencies"].get("angular").is_none());

    // configuration persisted for the next run
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dest.join("config.json")).unwrap()).unwrap();
    assert_eq!(saved["generate"], serde_json::json!("react"));
    assert_eq!(saved["react"], serde_json::json!(true));
    assert_eq!(saved["angular"], serde_json::json!(false));
}

#[test]
fn framework_flag_switches_to_angular() {
    let temp = TempDir::new().unwrap();
    write_template_tree(&temp.path().join("templates"));

    spindle()
        .current_dir(temp.path())
        .args([
            "generate",
            "demo",
            "--template-dir",
            "templates",
            "--defaults",
            "--framework",
            "angular",
        ])
        .assert()
        .success();

    let dest = temp.path().join("demo");
    assert_eq!(
        fs::read_to_string(dest.join("src/app/app.js")).unwrap(),
        "// angular app shell\n"
    );
    assert_eq!(
        fs::read_to_string(dest.join("src/app/main/things/things.js")).unwrap(),
        "// things module for demo\n"
    );

    let pkg: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dest.join("package.json")).unwrap()).unwrap();
    assert_eq!(pkg["dependencies"]["angular"], serde_json::json!("^1.4.0"));
    assert!(pkg["dependencies"].get("react").is_none());
}

#[test]
fn missing_template_dir_is_a_not_found_error() {
    let temp = TempDir::new().unwrap();

    spindle()
        .current_dir(temp.path())
        .args(["generate", "demo", "--defaults"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Template directory not found"))
        .stderr(predicate::str::contains("--template-dir"));
}

#[test]
fn quiet_run_prints_nothing_to_stdout() {
    let temp = TempDir::new().unwrap();
    write_template_tree(&temp.path().join("templates"));

    spindle()
        .current_dir(temp.path())
        .args([
            "-q",
            "generate",
            "demo",
            "--template-dir",
            "templates",
            "--defaults",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("demo/bower.json").exists());
}
