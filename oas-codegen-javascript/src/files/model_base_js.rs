//! Generated model base class.

use std::path::{Path, PathBuf};

use oas_core::{FileRules, GeneratedFile};

use super::MODEL_BASE_CLASS;
use crate::{
    ast::{Class, Const, Export, Field, Import, JsDoc, Method, Stmt, quote},
    code_file::CodeFile,
    context::GenerationContext,
    model::{ModelDefinition, ModelProperty},
    naming::property_key,
    proxy::PROXY_CLASS,
};

/// `<models>/base/<Name>Base.js`, rewritten on every run.
pub struct ModelBaseJs {
    definition: ModelDefinition,
    path: PathBuf,
    imports: Vec<Import>,
}

impl ModelBaseJs {
    pub fn new(context: &GenerationContext, definition: ModelDefinition) -> Self {
        let path = context.model_base_file(&definition.name);
        let import = |name: &str, to: PathBuf| {
            Import::new(context.import_path(&path, &to)).default(name)
        };

        let mut imports = vec![
            import(
                MODEL_BASE_CLASS,
                context
                    .models_base_dir()
                    .join(format!("{}.js", MODEL_BASE_CLASS)),
            ),
            import(&definition.name, context.model_file(&definition.name)),
            import(PROXY_CLASS, context.model_proxy_file()),
        ];
        imports.extend(
            definition
                .extra_imports
                .iter()
                .map(|model| import(model, context.model_file(model))),
        );

        Self {
            definition,
            path,
            imports,
        }
    }

    fn model_definition(&self) -> Const {
        let entries = self
            .definition
            .hydration_table()
            .iter()
            .map(|(name, tag)| {
                format!(
                    "{}.createModelProperty({}, {})",
                    MODEL_BASE_CLASS,
                    quote(name),
                    quote(&tag.to_string())
                )
            })
            .collect();
        Const::array("modelDefinition", entries)
    }

    fn class_doc(&self) -> JsDoc {
        let definition = &self.definition;
        let doc = JsDoc::new()
            .text(definition.description.as_deref())
            .blank()
            .line(format!("@class {}", definition.base_name()))
            .line(format!("@extends {}", MODEL_BASE_CLASS));

        definition.properties.iter().fold(doc, |doc, property| {
            let name = if definition.is_required(&property.name) {
                property.name.clone()
            } else {
                format!("[{}]", property.name)
            };
            doc.property(
                &property.resolved.display,
                &name,
                property.doc_suffix().as_deref(),
            )
        })
    }

    fn field(property: &ModelProperty) -> Field {
        let format = property.resolved.format.as_deref().map(|f| format!("({})", f));
        Field::new(property_key(&property.name)).doc(
            JsDoc::new()
                .text(property.description())
                .blank()
                .ty(&property.resolved.display, &property.name, format.as_deref()),
        )
    }

    fn create(&self) -> Method {
        let name = &self.definition.name;
        Method::new("create")
            .static_()
            .param("genericObject")
            .doc(
                JsDoc::new()
                    .text(Some(
                        format!("Creates a {} from a generic object, typically parsed JSON", name)
                            .as_str(),
                    ))
                    .blank()
                    .param("object", "genericObject", false, None)
                    .returns(name),
            )
            .body([
                Stmt::const_("model", format!("new {}()", name)),
                Stmt::expr(format!(
                    "model.instantiate(modelDefinition, genericObject, {}.createByClassName)",
                    PROXY_CLASS
                )),
                Stmt::return_("model"),
            ])
    }

    fn create_array(&self) -> Method {
        let name = &self.definition.name;
        Method::new("createArray")
            .static_()
            .param("genericArray")
            .doc(
                JsDoc::new()
                    .text(Some(
                        format!("Creates one {} per element; null stays null", name).as_str(),
                    ))
                    .blank()
                    .param("[object]", "genericArray", false, None)
                    .returns(&format!("[{}]", name)),
            )
            .body([
                Stmt::if_(
                    "(genericArray === null) || (genericArray === undefined)",
                    vec![Stmt::return_("null")],
                ),
                Stmt::Blank,
                Stmt::return_(format!(
                    "genericArray.map(genericObject => {}.create(genericObject))",
                    name
                )),
            ])
    }

    fn order_by(&self) -> Vec<Stmt> {
        let base = self.definition.base_name();
        self.definition
            .order_by
            .iter()
            .map(|constant| {
                Stmt::expr(format!(
                    "{}.{} = {}",
                    base,
                    constant.name,
                    quote(&constant.value)
                ))
            })
            .collect()
    }
}

impl GeneratedFile for ModelBaseJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        let class = Class::new(self.definition.base_name())
            .extends(MODEL_BASE_CLASS)
            .doc(self.class_doc())
            .fields(self.definition.properties.iter().map(Self::field))
            .method(self.create())
            .method(self.create_array());

        CodeFile::generated()
            .imports(self.imports.iter().cloned())
            .add(self.model_definition())
            .add(class)
            .add(self.order_by())
            .export(Export::default(self.definition.base_name()))
            .render()
    }
}
