//! End-to-end generation against a temporary Go module.

mod common;

use std::fs;

use common::{FakeRunner, Project};
use kratos_scaffold_codegen::{Error, GoImports, Passthrough, PhaseKind, Pipeline, RunState};
use kratos_scaffold_config::Config;

const USER_FIELDS: &[&str] = &[
    "id:int64:eq,in",
    "name:string:contains",
    "age:int32:gte,lte",
];

#[test]
fn test_user_example_generates_every_artifact() {
    let project = Project::new("user", "", USER_FIELDS);
    let runner = FakeRunner::default();
    let normalizer = GoImports::new(&runner, "goimports");

    let report = Pipeline::new(&runner, &normalizer)
        .run(&project.ent, &project.layout, &project.config)
        .unwrap();

    let data = project.dir.path().join("internal/data");
    assert!(data.join("ent/schema/user.go").is_file());
    assert!(data.join("ent/generate.go").is_file());
    assert!(data.join("ent/external/sql.tmpl").is_file());
    assert!(data.join("user_transfer.go").is_file());
    assert!(data.join("user.go").is_file());
    assert_eq!(report.history.last(), Some(&RunState::Done));

    let names: Vec<_> = project
        .ent
        .param_fields()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["idEq", "idIn", "nameContains", "ageGte", "ageLte"]);

    let source = fs::read_to_string(data.join("user.go")).unwrap();
    let filters = [
        "param.IdEq",
        "param.IdIn",
        "param.NameContains",
        "param.AgeGte",
        "param.AgeLte",
    ];
    let positions: Vec<usize> = filters
        .iter()
        .map(|f| source.find(f).unwrap_or_else(|| panic!("{f} missing")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_tools_run_in_order_from_module_root() {
    let project = Project::new("user", "mall", USER_FIELDS);
    let runner = FakeRunner::default();
    let normalizer = GoImports::new(&runner, "goimports");

    let report = Pipeline::new(&runner, &normalizer)
        .run(&project.ent, &project.layout, &project.config)
        .unwrap();

    let programs: Vec<String> = runner
        .command_lines()
        .into_iter()
        .map(|line| line.split(' ').take(2).collect::<Vec<_>>().join(" "))
        .collect();
    assert_eq!(
        programs,
        [
            "goimports -srcdir",
            "go mod",
            "go generate",
            "goimports -srcdir",
            "goimports -srcdir",
        ]
    );
    assert_eq!(
        report.tools,
        ["go mod tidy", "go generate ./app/mall/internal/data/ent"]
    );

    let calls = runner.calls.borrow();
    assert!(
        calls
            .iter()
            .filter(|c| c.program == "go")
            .all(|c| c.cwd == project.dir.path())
    );
}

#[test]
fn test_rerun_keeps_bootstrap_files() {
    let project = Project::new("user", "", USER_FIELDS);
    let runner = FakeRunner::default();
    let pipeline = Pipeline::new(&runner, &Passthrough);

    let first = pipeline
        .run(&project.ent, &project.layout, &project.config)
        .unwrap();
    assert_eq!(first.written.len(), 5);

    let second = pipeline
        .run(&project.ent, &project.layout, &project.config)
        .unwrap();
    assert_eq!(second.written.len(), 3);
    assert_eq!(
        second.skipped,
        [
            project.layout.schema_root().join("generate.go"),
            project.layout.schema_root().join("external/sql.tmpl"),
        ]
    );
}

#[test]
fn test_configured_features_reach_generate_go() {
    let mut config = Config::default();
    config.ent.features = vec!["sql/upsert".to_string()];
    let project = Project::with_config("user", "", USER_FIELDS, config);
    let runner = FakeRunner::default();

    Pipeline::new(&runner, &Passthrough)
        .run(&project.ent, &project.layout, &project.config)
        .unwrap();

    let generate_go =
        fs::read_to_string(project.layout.schema_root().join("generate.go")).unwrap();
    assert!(generate_go.contains("--feature sql/upsert ./schema"));
}

#[test]
fn test_compile_failure_leaves_later_phases_unwritten() {
    let project = Project::new("user", "", USER_FIELDS);
    let runner = FakeRunner::failing_on("go generate");

    let err = Pipeline::new(&runner, &Passthrough)
        .run(&project.ent, &project.layout, &project.config)
        .unwrap_err();

    assert_eq!(err.phase, PhaseKind::Schema);
    assert_eq!(err.reached, RunState::SchemaWritten);
    match &err.source {
        Error::ExternalTool { command, output, .. } => {
            assert_eq!(command, "go generate ./internal/data/ent");
            assert_eq!(output, "exit status 1");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(project.layout.schema_file().is_file());
    assert!(!project.layout.transfer_file().exists());
    assert!(!project.layout.data_file().exists());
}

#[test]
fn test_dependency_failure_skips_schema_compiler() {
    let project = Project::new("user", "", USER_FIELDS);
    let runner = FakeRunner::failing_on("mod tidy");

    let err = Pipeline::new(&runner, &Passthrough)
        .run(&project.ent, &project.layout, &project.config)
        .unwrap_err();

    assert_eq!(err.phase, PhaseKind::Schema);
    assert_eq!(runner.command_lines(), ["go mod tidy"]);
}
