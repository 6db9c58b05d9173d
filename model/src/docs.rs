/*!

Markdown documentation for a data source, laid out the way the Terraform registry renders provider
docs: a front matter block, the description, then one section per nesting level listing required,
optional and read-only attributes.

!*/

use crate::schema::{Attribute, AttributeKind, Attributes, ElementType, Schema};

const HEADER: &str = "<!-- This file is generated. Do not edit. -->\n";

/// Renders the documentation page of the data source `type_name`.
pub fn render_markdown(type_name: &str, schema: &Schema) -> String {
    let mut doc = String::new();
    doc.push_str("---\n");
    doc.push_str(&format!(
        "page_title: \"{} Data Source - terraform-provider-k8s\"\n",
        type_name
    ));
    doc.push_str("description: |-\n");
    doc.push_str(&format!("  {}\n", schema.description()));
    doc.push_str("---\n\n");
    doc.push_str(HEADER);
    doc.push('\n');
    doc.push_str(&format!("# {} (Data Source)\n\n", type_name));
    doc.push_str(&format!("{}\n\n", schema.description()));
    doc.push_str("## Schema\n");

    let mut nested = Vec::new();
    attribute_sections(&mut doc, schema.attributes(), "", &mut nested, "###");
    while !nested.is_empty() {
        let pending = std::mem::take(&mut nested);
        for (anchor, path, attributes) in pending {
            doc.push_str(&format!("\n<a id=\"{}\"></a>\n", anchor));
            doc.push_str(&format!("### Nested Schema for `{}`\n", path));
            attribute_sections(&mut doc, attributes, &path, &mut nested, "");
        }
    }
    doc
}

type Pending<'a> = Vec<(String, String, &'a Attributes)>;

fn attribute_sections<'a>(
    doc: &mut String,
    attributes: &'a Attributes,
    parent: &str,
    nested: &mut Pending<'a>,
    heading: &str,
) {
    let groups: [(&str, fn(&Attribute) -> bool); 3] = [
        ("Required", Attribute::is_required),
        ("Optional", |a| !a.is_required() && !a.is_read_only()),
        ("Read-Only", Attribute::is_read_only),
    ];
    for (title, include) in groups {
        let members: Vec<_> = attributes
            .iter()
            .filter(|(_, attribute)| include(attribute))
            .collect();
        if members.is_empty() {
            continue;
        }
        if heading.is_empty() {
            doc.push_str(&format!("\n{}:\n\n", title));
        } else {
            doc.push_str(&format!("\n{} {}\n\n", heading, title));
        }
        for (name, attribute) in members {
            let path = if parent.is_empty() {
                name.to_string()
            } else {
                format!("{}.{}", parent, name)
            };
            doc.push_str(&format!(
                "- `{}` ({}) {}",
                name,
                type_label(attribute.kind()),
                attribute.description()
            ));
            if let Some(attributes) = attribute.kind().nested() {
                let anchor = format!("nestedatt--{}", path.replace('.', "--"));
                doc.push_str(&format!(
                    " (see [below for nested schema](#{}))",
                    anchor
                ));
                nested.push((anchor, path, attributes));
            }
            doc.push('\n');
        }
    }
}

fn element_label(element: ElementType) -> &'static str {
    match element {
        ElementType::String => "String",
        ElementType::Bool => "Boolean",
        ElementType::Int64 | ElementType::Float64 => "Number",
    }
}

fn type_label(kind: &AttributeKind) -> String {
    match kind {
        AttributeKind::String => "String".to_string(),
        AttributeKind::Bool => "Boolean".to_string(),
        AttributeKind::Int64 | AttributeKind::Float64 => "Number".to_string(),
        AttributeKind::List(element) => format!("List of {}", element_label(*element)),
        AttributeKind::Map(element) => format!("Map of {}", element_label(*element)),
        AttributeKind::IntOrString => "String or Number".to_string(),
        AttributeKind::Dynamic => "Dynamic".to_string(),
        AttributeKind::SingleNested(_) => "Attributes".to_string(),
        AttributeKind::ListNested(_) => "Attributes List".to_string(),
        AttributeKind::MapNested(_) => "Attributes Map".to_string(),
    }
}
