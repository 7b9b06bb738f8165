mod common;

use common::{Audit, MemberForm, MemberRow};
use pretty_assertions::assert_eq;
use recordkit_model::{Field, Record, TypeTag, enumerate_fields, record_fields, shape};

fn names<R: Record>() -> Vec<&'static str> {
    enumerate_fields::<R>().iter().map(|f| f.name).collect()
}

// ── Enumeration order ────────────────────────────────────────────

#[test]
fn plain_fields_in_declaration_order() {
    assert_eq!(names::<Audit>(), vec!["created_by", "created_at"]);
}

#[test]
fn embedded_fields_replace_the_embedding_field() {
    assert_eq!(
        names::<MemberForm>(),
        vec!["name", "age", "phone", "level", "remark", "created_by", "created_at"]
    );
}

#[test]
fn embedding_field_is_never_emitted() {
    assert!(enumerate_fields::<MemberForm>().iter().all(|f| f.name != "audit"));
}

#[derive(Debug, Clone, Default)]
struct Stamp {
    at: i64,
}

#[derive(Debug, Clone, Default)]
struct Meta {
    stamp: Stamp,
    owner: String,
}

#[derive(Debug, Clone, Default)]
struct Post {
    meta: Meta,
    title: String,
}

record_fields!(Stamp { at });
record_fields!(Meta { stamp: embedded, owner });
record_fields!(Post { meta: embedded, title });

#[test]
fn embedding_is_flattened_recursively() {
    assert_eq!(names::<Post>(), vec!["at", "owner", "title"]);
}

#[test]
fn promoted_fields_read_through_the_container() {
    let post = Post {
        meta: Meta {
            stamp: Stamp { at: 77 },
            owner: "li".to_string(),
        },
        title: "hello".to_string(),
    };
    let shape = shape::<Post>();
    let at = shape.get("at").unwrap().get(&post);
    assert_eq!(at.downcast_ref::<i64>(), Some(&77));
}

#[derive(Debug, Clone, Default)]
struct Titled {
    meta: Meta,
    owner: String,
}

record_fields!(Titled { meta: embedded, owner });

#[test]
fn direct_field_shadows_promoted_one_in_lookup() {
    let titled = Titled {
        meta: Meta {
            stamp: Stamp { at: 1 },
            owner: "promoted".to_string(),
        },
        owner: "direct".to_string(),
    };
    let shape = shape::<Titled>();
    assert_eq!(names::<Titled>(), vec!["at", "owner", "owner"]);
    assert_eq!(shape.position("owner"), Some(2));
    let owner = shape.get("owner").unwrap().get(&titled);
    assert_eq!(owner.downcast_ref::<String>().map(String::as_str), Some("direct"));
}

// ── Descriptors ──────────────────────────────────────────────────

#[test]
fn descriptors_carry_declared_types() {
    let fields = enumerate_fields::<MemberRow>();
    assert_eq!(fields[0].declared_type, TypeTag::of::<i64>());
    assert_eq!(fields[3].name, "phone");
    assert_eq!(fields[3].declared_type, TypeTag::optional::<String>());
    assert!(fields[3].declared_type.is_optional());
    assert!(fields.iter().all(|f| !f.anonymous));
}

#[derive(Debug, Clone, Default)]
struct Tagged {
    label: String,
    extra: Option<String>,
}

record_fields!(Tagged { label, extra: anonymous });

#[test]
fn anonymous_non_record_fields_are_emitted_and_flagged() {
    let fields = enumerate_fields::<Tagged>();
    assert_eq!(fields.len(), 2);
    assert!(!fields[0].anonymous);
    assert!(fields[1].anonymous);
}

#[test]
fn read_only_flag_is_kept_in_shape() {
    let shape = shape::<MemberRow>();
    assert!(!shape.get("id").unwrap().is_writable());
    assert!(shape.get("name").unwrap().is_writable());
}

// ── Hand-written tables ──────────────────────────────────────────

struct Point {
    x: i32,
    y: i32,
}

impl Record for Point {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::value("x", |p: &Point| &p.x, |p: &mut Point| &mut p.x),
            Field::value("y", |p: &Point| &p.y, |p: &mut Point| &mut p.y).read_only(),
        ]
    }
}

#[test]
fn hand_written_table_enumerates() {
    let fields = enumerate_fields::<Point>();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].name, "y");

    let p = Point { x: 1, y: 2 };
    let y = shape::<Point>().get("y").unwrap().get(&p);
    assert_eq!(y.downcast_ref::<i32>(), Some(&2));
    assert_eq!(p.x, 1);
}

#[test]
fn shape_is_shared_between_calls() {
    let a = shape::<MemberForm>();
    let b = shape::<MemberForm>();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}
