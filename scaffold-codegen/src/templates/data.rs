use std::path::PathBuf;

use kratos_scaffold_core::{normalize_identifier, to_camel_case, to_lower, to_pascal_case};
use kratos_scaffold_field::{Arity, PredicateParam};

use super::{BIZ_ID, Template, go_type, import_block};
use crate::{CodeBuilder, DataEnt, ProjectLayout, Result};

const KRATOS_LOG: &str = "github.com/go-kratos/kratos/v2/log";

/// The repository implementation (`<name>.go`).
pub struct DataGo<'a> {
    ent: &'a DataEnt,
}

impl<'a> DataGo<'a> {
    pub fn new(ent: &'a DataEnt) -> Self {
        Self { ent }
    }

    fn repo(&self) -> String {
        format!("{}Repo", to_camel_case(&self.ent.name))
    }

    /// The `// userRepo ...` comment listing the persisted fields.
    fn repo_doc(&self) -> String {
        let fields = &self.ent.fields;
        let mut doc = format!("{} persists {}", self.repo(), self.ent.name);
        if !fields.is_empty() {
            doc.push_str(" (");
            for (i, field) in fields.iter().enumerate() {
                doc.push_str(&field.name);
                if !DataEnt::is_last(i, fields) {
                    doc.push_str(", ");
                }
            }
            doc.push(')');
        }
        doc.push_str(" through ent.");
        doc
    }

    /// `.SetName(u.Name).` lines for create and update.
    fn setters(&self) -> Vec<String> {
        self.ent
            .fields_except_primary()
            .into_iter()
            .map(|f| {
                format!(
                    "Set{}(u.{}).",
                    normalize_identifier(&f.name),
                    to_pascal_case(&f.name)
                )
            })
            .collect()
    }
}

/// The filter applied for one query parameter.
fn filter(b: CodeBuilder, pkg: &str, param: &PredicateParam) -> CodeBuilder {
    let field = to_pascal_case(&param.name);
    let accessor = &param.storage_accessor;
    match param.kind.arity() {
        Arity::Single => b.block(&format!("if param.{} != nil {{", field), |b| {
            b.line(&format!("q.Where({}.{}(*param.{}))", pkg, accessor, field))
        }),
        Arity::List => b.block(&format!("if len(param.{}) > 0 {{", field), |b| {
            b.line(&format!("q.Where({}.{}(param.{}...))", pkg, accessor, field))
        }),
        Arity::Flag => b.block(
            &format!("if param.{} != nil && *param.{} {{", field, field),
            |b| b.line(&format!("q.Where({}.{}())", pkg, accessor)),
        ),
    }
}

/// `if err != nil { return <zero>, err }`
fn check_err(b: CodeBuilder, zero: &str) -> CodeBuilder {
    b.block("if err != nil {", |b| b.line(&format!("return {}err", zero)))
}

impl Template for DataGo<'_> {
    fn name(&self) -> &'static str {
        "data repository"
    }

    fn path(&self, layout: &ProjectLayout) -> PathBuf {
        layout.data_file().to_path_buf()
    }

    fn render(&self, layout: &ProjectLayout) -> Result<String> {
        for field in &self.ent.fields {
            go_type(self.name(), field)?;
        }

        let name = &self.ent.name;
        let repo = self.repo();
        let pkg = to_lower(name);
        let id_type = self.ent.id_type();
        let params = self.ent.param_fields();
        let setters = self.setters();

        let imports = import_block(&[
            vec!["context".to_string()],
            vec![KRATOS_LOG.to_string()],
            vec![
                layout.biz_pkg(),
                layout.ent_pkg(),
                format!("{}/{}", layout.ent_pkg(), pkg),
            ],
        ]);

        let code = CodeBuilder::new()
            .line("package data")
            .blank()
            .raw(&imports)
            .blank()
            .comment(&self.repo_doc())
            .block(&format!("type {} struct {{", repo), |b| {
                b.line("data *Data").line("log  *log.Helper")
            })
            .blank()
            .comment(&format!("New{}Repo returns the ent-backed biz.{}Repo.", name, name))
            .block(
                &format!(
                    "func New{}Repo(data *Data, logger log.Logger) biz.{}Repo {{",
                    name, name
                ),
                |b| {
                    b.block_with_close(&format!("return &{}{{", repo), "}", |b| {
                        b.line("data: data,").line("log:  log.NewHelper(logger),")
                    })
                },
            )
            .blank()
            // Create
            .block(
                &format!(
                    "func (r *{}) Create(ctx context.Context, u *biz.{}) (*biz.{}, error) {{",
                    repo, name, name
                ),
                |b| {
                    let b = b
                        .line(&format!("e, err := r.data.db.{}.Create().", name))
                        .indent()
                        .each(&setters, |b, s| b.line(s))
                        .line("Save(ctx)")
                        .dedent();
                    check_err(b, "nil, ").line(&format!("return to{}Biz(e), nil", name))
                },
            )
            .blank()
            // Update
            .block(
                &format!(
                    "func (r *{}) Update(ctx context.Context, u *biz.{}) (*biz.{}, error) {{",
                    repo, name, name
                ),
                |b| {
                    let b = b
                        .line(&format!(
                            "e, err := r.data.db.{}.UpdateOneID(u.{}).",
                            name, BIZ_ID
                        ))
                        .indent()
                        .each(&setters, |b, s| b.line(s))
                        .line("Save(ctx)")
                        .dedent();
                    check_err(b, "nil, ").line(&format!("return to{}Biz(e), nil", name))
                },
            )
            .blank()
            // Delete
            .block(
                &format!(
                    "func (r *{}) Delete(ctx context.Context, id {}) error {{",
                    repo, id_type
                ),
                |b| b.line(&format!("return r.data.db.{}.DeleteOneID(id).Exec(ctx)", name)),
            )
            .blank()
            // Get
            .block(
                &format!(
                    "func (r *{}) Get(ctx context.Context, id {}) (*biz.{}, error) {{",
                    repo, id_type, name
                ),
                |b| {
                    let b = b.line(&format!("e, err := r.data.db.{}.Get(ctx, id)", name));
                    check_err(b, "nil, ").line(&format!("return to{}Biz(e), nil", name))
                },
            )
            .blank()
            // List
            .block(
                &format!(
                    "func (r *{}) List(ctx context.Context, param *biz.{}Param) ([]*biz.{}, int, error) {{",
                    repo, name, name
                ),
                |b| {
                    let b = b
                        .block("if param == nil {", |b| {
                            b.line(&format!("param = &biz.{}Param{{}}", name))
                        })
                        .line(&format!("q := r.data.db.{}.Query()", name))
                        .each(&params, |b, param| filter(b, &pkg, param))
                        .line("total, err := q.Clone().Count(ctx)");
                    let b = check_err(b, "nil, 0, ")
                        .block("if param.Page > 0 && param.PageSize > 0 {", |b| {
                            b.line("q.Offset((param.Page - 1) * param.PageSize).Limit(param.PageSize)")
                        })
                        .line("es, err := q.All(ctx)");
                    check_err(b, "nil, 0, ")
                        .line(&format!("return to{}BizList(es), total, nil", name))
                },
            )
            .build();

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use kratos_scaffold_config::ProjectConfig;
    use kratos_scaffold_field::{FieldParser, PredicateRegistry};

    use super::*;

    fn render(raws: &[&str]) -> Result<String> {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("go.mod"), "module example.com/shop\n").unwrap();

        let fields = FieldParser::new(&PredicateRegistry::standard())
            .parse_all(raws)
            .unwrap();
        let ent = DataEnt::new("users", "", fields, &ProjectConfig::default()).unwrap();
        let layout = ProjectLayout::resolve(temp.path(), &ent, &ProjectConfig::default()).unwrap();
        DataGo::new(&ent).render(&layout)
    }

    fn position(code: &str, needle: &str) -> usize {
        code.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in:\n{code}"))
    }

    #[test]
    fn test_filters_follow_param_order() {
        let code = render(&[
            "id:int64:eq,in",
            "name:string:contains",
            "age:int32:gte,lte",
        ])
        .unwrap();

        let order = [
            "q.Where(user.IDEQ(*param.IdEq))",
            "q.Where(user.IDIn(param.IdIn...))",
            "q.Where(user.NameContains(*param.NameContains))",
            "q.Where(user.AgeGTE(*param.AgeGte))",
            "q.Where(user.AgeLTE(*param.AgeLte))",
        ];
        let positions: Vec<_> = order.iter().map(|n| position(&code, n)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_flag_predicates_take_no_argument() {
        let code = render(&["deletedAt:time.Time:isnull,notnull"]).unwrap();
        assert!(code.contains("if param.DeletedAtIsNull != nil && *param.DeletedAtIsNull {"));
        assert!(code.contains("q.Where(user.DeletedAtIsNil())"));
        assert!(code.contains("q.Where(user.DeletedAtNotNil())"));
    }

    #[test]
    fn test_setters_skip_primary_key() {
        let code = render(&["id:int64", "name:string", "ownerId:int64"]).unwrap();
        assert!(code.contains("\t\tSetName(u.Name).\n"));
        assert!(code.contains("\t\tSetOwnerID(u.OwnerId).\n"));
        assert!(!code.contains("SetID("));
        assert!(code.contains("UpdateOneID(u.Id)."));
        assert!(code.contains("Delete(ctx context.Context, id int64) error {"));
    }

    #[test]
    fn test_repo_doc_lists_fields() {
        let code = render(&["id:int64", "name:string"]).unwrap();
        assert!(code.contains("// userRepo persists User (id, name) through ent.\n"));
    }

    #[test]
    fn test_imports_entity_package() {
        let code = render(&["name:string"]).unwrap();
        assert!(code.contains("\t\"example.com/shop/internal/data/ent/user\"\n"));
        assert!(code.contains("Get(ctx context.Context, id int) (*biz.User, error) {"));
    }

    #[test]
    fn test_list_paginates_after_count() {
        let code = render(&["name:string:eq"]).unwrap();
        let count = position(&code, "total, err := q.Clone().Count(ctx)");
        let page = position(&code, "q.Offset((param.Page - 1) * param.PageSize)");
        let all = position(&code, "es, err := q.All(ctx)");
        assert!(count < page && page < all);
    }
}
