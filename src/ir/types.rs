//! Resolved type model shared between resolution and emission.
//!
//! [`TypeSpec`] is the uniform node every swagger descriptor resolves to.
//! The active [`TsType`] variant fully determines which projections are
//! populated; the template-facing booleans (`isRef`, `isArray`, ...) are
//! computed from it rather than stored.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The resolved TypeScript type of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Named reference to another definition, e.g. `UserDto`.
    Ref(String),
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `T[]`, carrying the resolved element type.
    Array(Box<TypeSpec>),
    /// Inline object. The property list stays empty until composed types
    /// are supported.
    Object(Vec<TypeSpec>),
    /// Union of literal values, pre-rendered: `"A" | "B"`.
    Enum(String),
    /// `any`
    Any,
}

/// A resolved type together with the swagger description it came from.
///
/// Instances are built by [`resolve`](crate::ir::resolve::resolve) and
/// never mutated afterwards; the emission layer reads them through the
/// accessors or through the serialized template model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Description carried over from the descriptor, when present.
    pub description: Option<String>,
    /// The resolved type.
    pub ty: TsType,
}

impl TypeSpec {
    /// Rendered type tag. For literal unions this is the union itself,
    /// so it can be spliced into a type position as-is.
    pub fn ts_type(&self) -> &str {
        match &self.ty {
            TsType::Ref(_) => "ref",
            TsType::String => "string",
            TsType::Number => "number",
            TsType::Boolean => "boolean",
            TsType::Array(_) => "array",
            TsType::Object(_) => "object",
            TsType::Enum(union) => union,
            TsType::Any => "any",
        }
    }

    /// Referenced definition name, for ref nodes.
    pub fn target(&self) -> Option<&str> {
        match &self.ty {
            TsType::Ref(target) => Some(target),
            _ => None,
        }
    }

    /// Resolved element type, for array nodes.
    pub fn element_type(&self) -> Option<&TypeSpec> {
        match &self.ty {
            TsType::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Resolved property types, for object nodes.
    pub fn properties(&self) -> Option<&[TypeSpec]> {
        match &self.ty {
            TsType::Object(properties) => Some(properties),
            _ => None,
        }
    }

    /// True for reference nodes.
    pub fn is_ref(&self) -> bool {
        matches!(self.ty, TsType::Ref(_))
    }

    /// True for object nodes.
    pub fn is_object(&self) -> bool {
        matches!(self.ty, TsType::Object(_))
    }

    /// True for array nodes.
    pub fn is_array(&self) -> bool {
        matches!(self.ty, TsType::Array(_))
    }

    /// True for nodes that render without further structure: primitives,
    /// literal unions, and `any`.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self.ty,
            TsType::String | TsType::Number | TsType::Boolean | TsType::Enum(_) | TsType::Any
        )
    }

    /// True for literal-union nodes.
    pub fn is_enum(&self) -> bool {
        matches!(self.ty, TsType::Enum(_))
    }
}

impl Serialize for TypeSpec {
    /// Serializes the flat template model consumed by the emission layer:
    /// `tsType` plus the five derived booleans always, `description`,
    /// `target`, `elementType` and `properties` only when the variant
    /// carries them.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut len = 6;
        if self.description.is_some() {
            len += 1;
        }
        if matches!(
            self.ty,
            TsType::Ref(_) | TsType::Array(_) | TsType::Object(_)
        ) {
            len += 1;
        }

        let mut state = serializer.serialize_struct("TypeSpec", len)?;
        if let Some(description) = &self.description {
            state.serialize_field("description", description)?;
        }
        state.serialize_field("tsType", self.ts_type())?;
        match &self.ty {
            TsType::Ref(target) => state.serialize_field("target", target)?,
            TsType::Array(element) => state.serialize_field("elementType", element)?,
            TsType::Object(properties) => state.serialize_field("properties", properties)?,
            _ => {}
        }
        state.serialize_field("isRef", &self.is_ref())?;
        state.serialize_field("isObject", &self.is_object())?;
        state.serialize_field("isArray", &self.is_array())?;
        state.serialize_field("isAtomic", &self.is_atomic())?;
        state.serialize_field("isEnum", &self.is_enum())?;
        state.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::{TsType, TypeSpec};

    fn spec(ty: TsType) -> TypeSpec {
        TypeSpec {
            description: None,
            ty,
        }
    }

    #[test]
    fn test_exactly_one_structural_flag_for_non_atomic() {
        for node in [
            spec(TsType::Ref("Foo".to_string())),
            spec(TsType::Array(Box::new(spec(TsType::String)))),
            spec(TsType::Object(Vec::new())),
        ] {
            let flags = [node.is_ref(), node.is_object(), node.is_array()];
            assert_eq!(
                flags.iter().filter(|f| **f).count(),
                1,
                "expected exactly one structural flag for {node:?}"
            );
            assert!(!node.is_atomic());
        }
    }

    #[test]
    fn test_atomic_variants() {
        for node in [
            spec(TsType::String),
            spec(TsType::Number),
            spec(TsType::Boolean),
            spec(TsType::Enum("\"A\" | \"B\"".to_string())),
            spec(TsType::Any),
        ] {
            assert!(node.is_atomic(), "expected atomic: {node:?}");
            assert!(!node.is_ref() && !node.is_object() && !node.is_array());
        }
    }

    #[test]
    fn test_ts_type_renders_the_enum_union_itself() {
        let node = spec(TsType::Enum("\"on\" | \"off\"".to_string()));
        assert_eq!(node.ts_type(), "\"on\" | \"off\"");
        assert!(node.is_enum());
    }

    #[test]
    fn test_projections_follow_the_variant() {
        let array = spec(TsType::Array(Box::new(spec(TsType::Number))));
        assert_eq!(array.element_type().unwrap().ts_type(), "number");
        assert!(array.target().is_none());
        assert!(array.properties().is_none());

        let reference = spec(TsType::Ref("PetDto".to_string()));
        assert_eq!(reference.target(), Some("PetDto"));
        assert!(reference.element_type().is_none());

        let object = spec(TsType::Object(Vec::new()));
        assert_eq!(object.properties(), Some(&[][..]));
    }

    #[test]
    fn test_serialized_ref_template_model() {
        let node = TypeSpec {
            description: Some("A pet".to_string()),
            ty: TsType::Ref("PetDto".to_string()),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "A pet",
                "tsType": "ref",
                "target": "PetDto",
                "isRef": true,
                "isObject": false,
                "isArray": false,
                "isAtomic": false,
                "isEnum": false,
            })
        );
    }

    #[test]
    fn test_serialized_array_nests_element_type() {
        let node = spec(TsType::Array(Box::new(spec(TsType::String))));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["tsType"], "array");
        assert_eq!(json["elementType"]["tsType"], "string");
        assert_eq!(json["elementType"]["isAtomic"], true);
        // Inactive projections stay off the template model entirely.
        assert!(json.get("target").is_none());
        assert!(json.get("properties").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_serialized_object_has_empty_properties() {
        let node = spec(TsType::Object(Vec::new()));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["tsType"], "object");
        assert_eq!(json["properties"], serde_json::json!([]));
        assert_eq!(json["isObject"], true);
    }
}
