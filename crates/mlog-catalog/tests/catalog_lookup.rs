use mlog_catalog::{OperationCatalog, ResourceCatalog, ResourceTable};
use mlog_core::{OperationId, ResourceKind, ResourceTypeId};

#[test]
fn unresolved_types_are_schema_mismatches() {
    let catalog = ResourceCatalog::new().with(
        ResourceKind::Vessel,
        ResourceTable::numeric(
            ResourceTypeId::new("Tugboat").unwrap(),
            &["Bollard_t"],
            &[vec![40.0]],
        )
        .unwrap(),
    );
    let tug = ResourceTypeId::new("Tugboat").unwrap();
    assert_eq!(catalog.table(ResourceKind::Vessel, &tug).unwrap().len(), 1);

    // Same name, wrong kind.
    let err = catalog.table(ResourceKind::Equipment, &tug).unwrap_err();
    assert!(err.is_schema_mismatch());
    assert_eq!(err.code(), "unresolved-type");
    assert_eq!(err.info().context["kind"], "equipment");

    let divers = ResourceTypeId::new("Divers").unwrap();
    assert!(catalog.table(ResourceKind::Equipment, &divers).is_err());
}

#[test]
fn standard_operations_are_registered() {
    let operations = OperationCatalog::standard();
    assert_eq!(operations.len(), 42);
    let mobilisation = operations.get("op1").unwrap();
    assert_eq!(mobilisation.id, OperationId::from_raw(10));
    assert_eq!(mobilisation.duration_h, 48.0);
    assert_eq!(mobilisation.operating_limits.len(), 4);
    let hammering = operations.get("op_F2").unwrap();
    assert!(hammering.description.contains("hammering"));
    assert_eq!(operations.get("op_X").unwrap_err().code(), "unknown-operation");
}

#[test]
fn operations_are_shared_not_copied() {
    let operations = OperationCatalog::standard();
    let first = operations.get("op4").unwrap();
    let second = operations.get("op4").unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
