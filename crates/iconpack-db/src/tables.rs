use redb::TableDefinition;

/// Table for persisted collection selections.
/// Key: pack id
/// Value: serialized CollectionSelection (id -> id map) as JSON bytes
pub const SELECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("selections");
