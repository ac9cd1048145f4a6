//! Snapshot tests for the rendered Go sources.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

mod common;

use std::path::Path;

use common::Project;
use kratos_scaffold_codegen::{Pipeline, PreviewFile};

fn preview_file<'a>(files: &'a [PreviewFile], path: &Path) -> &'a str {
    files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("{} not rendered", path.display()))
}

#[test]
fn test_user_schema() {
    let project = Project::new(
        "users",
        "",
        &["id:int64:eq,in", "name:string:contains", "age:int32:gte,lte"],
    );
    let files = Pipeline::preview(&project.ent, &project.layout).unwrap();

    let schema = preview_file(&files, project.layout.schema_file());
    insta::assert_snapshot!("user_schema", schema);
}

#[test]
fn test_user_transfer() {
    let project = Project::new("user", "", &["id:int64:eq", "name:string"]);
    let files = Pipeline::preview(&project.ent, &project.layout).unwrap();

    let transfer = preview_file(&files, project.layout.transfer_file());
    insta::assert_snapshot!("user_transfer", transfer);
}

#[test]
fn test_user_data() {
    let project = Project::new(
        "users",
        "",
        &["id:int64:eq,in", "name:string:contains", "age:int32:gte,lte"],
    );
    let files = Pipeline::preview(&project.ent, &project.layout).unwrap();

    let data = preview_file(&files, project.layout.data_file());
    insta::assert_snapshot!("user_data", data);
}
