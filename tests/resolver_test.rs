//! Integration tests for schema resolution against injected environments.

use envschema::{resolve, resolve_from_process_env, MapEnv, ResolveError, Schema, Value};

fn db_schema() -> Schema {
    Schema::group([(
        "db",
        Schema::group([
            ("host", Schema::string("DB_HOST")),
            ("port", Schema::integer_or("DB_PORT", 5432)),
        ]),
    )])
}

#[test]
fn test_resolves_nested_schema_with_default_fallback() {
    let env: MapEnv = [("APP_DB_HOST", "localhost")].into_iter().collect();
    let config = resolve(&env, "APP_", &db_schema()).unwrap();

    let db = config.get("db").expect("db group should be present");
    assert_eq!(db.get("host").and_then(Value::as_str), Some("localhost"));
    assert_eq!(db.get("port").and_then(Value::as_i64), Some(5432));
}

#[test]
fn test_empty_environment_reports_only_defaultless_leaves() {
    let err = resolve(&MapEnv::new(), "APP_", &db_schema()).unwrap_err();
    match err {
        ResolveError::MissingVariables(names) => {
            // port has a default, so only the host is reported
            assert_eq!(names, ["APP_DB_HOST"]);
        }
        other => panic!("expected missing-variable error, got {other:?}"),
    }
}

#[test]
fn test_group_shape_and_key_order_are_preserved() {
    let schema = Schema::group([
        (
            "server",
            Schema::group([
                ("host", Schema::string("HOST")),
                ("port", Schema::integer("PORT")),
            ]),
        ),
        ("name", Schema::string("NAME")),
    ]);
    let env: MapEnv = [("HOST", "0.0.0.0"), ("PORT", "80"), ("NAME", "svc")]
        .into_iter()
        .collect();
    let config = resolve(&env, "", &schema).unwrap();

    let Value::Group(top) = &config else {
        panic!("expected group at the top level");
    };
    assert_eq!(top.keys().collect::<Vec<_>>(), ["server", "name"]);

    let Some(Value::Group(server)) = top.get("server") else {
        panic!("expected nested group");
    };
    assert_eq!(server.keys().collect::<Vec<_>>(), ["host", "port"]);
}

#[test]
fn test_prefix_is_concatenated_without_separator() {
    let schema = Schema::string("PORT");
    let env: MapEnv = [("SVCPORT", "from-svc"), ("PORT", "bare")]
        .into_iter()
        .collect();

    assert_eq!(
        resolve(&env, "SVC", &schema).unwrap(),
        Value::String("from-svc".into())
    );
    assert_eq!(
        resolve(&env, "", &schema).unwrap(),
        Value::String("bare".into())
    );
}

#[test]
fn test_bare_leaf_resolves_to_scalar() {
    let env: MapEnv = [("N", "17")].into_iter().collect();
    let value = resolve(&env, "", &Schema::integer("N")).unwrap();
    assert_eq!(value, Value::Integer(17));
}

#[test]
fn test_default_bypasses_kind_coercion() {
    // An integer leaf with a string default yields the string unchanged
    let schema = Schema::integer_or("PORT", "5");
    let value = resolve(&MapEnv::new(), "", &schema).unwrap();
    assert_eq!(value, Value::String("5".into()));
}

#[test]
fn test_all_missing_variables_aggregate_in_encounter_order() {
    let schema = Schema::group([
        ("a", Schema::string("ALPHA")),
        ("nested", Schema::group([("b", Schema::integer("BETA"))])),
        ("c", Schema::string("GAMMA")),
    ]);
    let err = resolve(&MapEnv::new(), "X_", &schema).unwrap_err();

    assert_eq!(err.missing(), ["X_ALPHA", "X_BETA", "X_GAMMA"]);
    assert_eq!(
        err.to_string(),
        "Missing environment variable(s): X_ALPHA, X_BETA, X_GAMMA"
    );
}

#[test]
fn test_duplicate_missing_variable_is_reported_once() {
    let schema = Schema::group([
        ("primary", Schema::string("TOKEN")),
        ("secondary", Schema::string("TOKEN")),
    ]);
    let err = resolve(&MapEnv::new(), "", &schema).unwrap_err();
    assert_eq!(err.missing(), ["TOKEN"]);
}

#[test]
fn test_integer_coercion_parses_leading_digits() {
    let env: MapEnv = [("N", "42abc")].into_iter().collect();
    let value = resolve(&env, "", &Schema::integer("N")).unwrap();
    assert_eq!(value, Value::Integer(42));
}

#[test]
fn test_unparseable_integer_passes_through_as_nan() {
    let env: MapEnv = [("N", "abc")].into_iter().collect();
    let value = resolve(&env, "", &Schema::integer("N")).unwrap();
    assert!(value.is_nan());
}

#[test]
fn test_unknown_kind_fails_fast_with_full_context() {
    let schema = Schema::group([
        ("flag", Schema::leaf("FLAG", "boolean")),
        // Later leaves would be missing, but the walk must abort first
        ("later", Schema::string("NEVER_SET")),
    ]);
    let env: MapEnv = [("APP_FLAG", "true")].into_iter().collect();
    let err = resolve(&env, "APP_", &schema).unwrap_err();

    match &err {
        ResolveError::UnknownKind { key, var, kind } => {
            assert_eq!(key, "flag");
            assert_eq!(var, "APP_FLAG");
            assert_eq!(kind, "boolean");
        }
        other => panic!("expected unknown-kind error, got {other:?}"),
    }
    assert!(err.to_string().contains("\"boolean\""));
    assert!(err.to_string().contains("APP_FLAG"));
}

#[test]
fn test_schema_parses_from_json_literal() {
    let schema: Schema = serde_json::from_str(
        r#"{
            "db": {
                "host": ["DB_HOST", "string"],
                "port": ["DB_PORT", "integer", 5432]
            }
        }"#,
    )
    .unwrap();
    assert_eq!(schema, db_schema());
}

#[test]
fn test_resolved_tree_serializes_as_plain_json() {
    let env: MapEnv = [("APP_DB_HOST", "localhost"), ("APP_DB_PORT", "9090")]
        .into_iter()
        .collect();
    let config = resolve(&env, "APP_", &db_schema()).unwrap();

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        serde_json::json!({"db": {"host": "localhost", "port": 9090}})
    );
}

#[test]
fn test_resolve_from_process_env_reads_live_variables() {
    temp_env::with_vars(
        [
            ("APP_DB_HOST", Some("example.com")),
            ("APP_DB_PORT", Some("9090")),
        ],
        || {
            let config = resolve_from_process_env("APP_", &db_schema()).unwrap();
            let db = config.get("db").unwrap();
            assert_eq!(db.get("host").and_then(Value::as_str), Some("example.com"));
            assert_eq!(db.get("port").and_then(Value::as_i64), Some(9090));
        },
    );
}

#[test]
fn test_resolve_from_process_env_reports_missing_variables() {
    temp_env::with_vars(
        [
            ("APP_DB_HOST", None::<&str>),
            ("APP_DB_PORT", None::<&str>),
        ],
        || {
            let err = resolve_from_process_env("APP_", &db_schema()).unwrap_err();
            assert_eq!(err.missing(), ["APP_DB_HOST"]);
        },
    );
}
