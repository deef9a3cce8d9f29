#[cfg(test)]
mod tests {
    use ox_type_mapper::{MapperError, MappingRegistry, TypeKey};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn create_registry() -> MappingRegistry {
        init_logging();
        let registry = MappingRegistry::new();
        registry.register(|v: &String| v.len()).unwrap();
        registry.register(|v: &usize| v.to_string()).unwrap();
        registry
    }

    #[test]
    fn test_registry_creation() {
        let registry = MappingRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.registered_keys().is_empty());
    }

    #[test]
    fn test_has_mapping() {
        let registry = create_registry();
        assert!(registry.has_mapping::<String, usize>());
        assert!(registry.has_mapping::<usize, String>());
        assert!(!registry.has_mapping::<String, String>());
        assert!(registry.contains_key(&TypeKey::of::<String, usize>()));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let registry = create_registry();
        let result = registry.register(|v: &String| v.len() * 100);

        match result {
            Err(MapperError::DuplicateMapping { source_type, destination_type }) => {
                assert_eq!(source_type, "alloc::string::String");
                assert_eq!(destination_type, "usize");
            }
            other => panic!("expected a duplicate mapping error, got {:?}", other),
        }

        // The first registration stays in effect.
        let length: usize = registry.map(&"four".to_string()).unwrap();
        assert_eq!(length, 4);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reversed_pair_is_not_registered() {
        init_logging();
        let registry = MappingRegistry::new();
        registry.register(|v: &String| v.len()).unwrap();

        let result: Result<String, _> = registry.map(&5_usize);
        assert_eq!(
            result,
            Err(MapperError::MappingNotFound {
                source_type: "usize",
                destination_type: "alloc::string::String",
            })
        );
    }

    #[test]
    fn test_absent_source() {
        let registry = create_registry();
        let result = registry.try_map::<String, usize>(None);
        assert!(matches!(result, Err(MapperError::InvalidSource { destination_type: "usize" })));

        let present = "abc".to_string();
        assert_eq!(registry.try_map::<String, usize>(Some(&present)), Ok(3));
    }

    #[test]
    fn test_registered_keys() {
        let registry = create_registry();
        let keys = registry.registered_keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&TypeKey::of::<String, usize>()));
        assert!(keys.contains(&TypeKey::of::<usize, String>()));
    }

    #[test]
    fn test_registry_is_independent_per_instance() {
        let first = create_registry();
        let second = MappingRegistry::new();
        assert!(first.has_mapping::<String, usize>());
        assert!(!second.has_mapping::<String, usize>());
        second.register(|v: &String| v.len()).unwrap();
    }
}
