//! # Model Registry

use std::sync::{Arc, RwLock};

use crate::{
    errors::TPResult,
    models::{ModelDefinition, ModelId, VocabLoader},
    tokenizer::{Tokenizer, TokenizerOptions},
    types::TPHashMap,
};

/// Caches one [`ModelDefinition`] per [`ModelId`].
///
/// Every [`Tokenizer`] made by a registry for the same model shares one
/// vocabulary. Definitions are built on first use, outside the lock;
/// when two threads race, the first insert wins.
pub struct ModelRegistry {
    loader: Arc<dyn VocabLoader>,
    cache: RwLock<TPHashMap<ModelId, Arc<ModelDefinition>>>,
}

impl core::fmt::Debug for ModelRegistry {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("loaded_models", &self.loaded_models())
            .finish()
    }
}

impl ModelRegistry {
    /// Create a registry over a loader.
    pub fn new<L>(loader: L) -> Self
    where
        L: VocabLoader + 'static,
    {
        Self::from_arc(Arc::new(loader))
    }

    /// Create a registry over a shared loader.
    pub fn from_arc(loader: Arc<dyn VocabLoader>) -> Self {
        Self {
            loader,
            cache: RwLock::new(TPHashMap::default()),
        }
    }

    /// Get the definition of a model, loading and building it on first use.
    pub fn definition(
        &self,
        id: ModelId,
    ) -> TPResult<Arc<ModelDefinition>> {
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(definition) = cache.get(&id) {
                log::debug!("model registry hit: {id}");
                return Ok(definition.clone());
            }
        }

        log::debug!("model registry miss: {id}");
        let definition = Arc::new(ModelDefinition::build(
            id,
            self.loader.load_rank_list(id)?,
        )?);

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        Ok(cache.entry(id).or_insert(definition).clone())
    }

    /// Build a [`Tokenizer`] for a model name, with default options.
    ///
    /// ## Returns
    /// [`TokenpressError::UnknownModel`](crate::TokenpressError::UnknownModel)
    /// for an unsupported name.
    pub fn tokenizer(
        &self,
        name: &str,
    ) -> TPResult<Tokenizer> {
        self.tokenizer_with_options(name, TokenizerOptions::default())
    }

    /// Build a [`Tokenizer`] for a model name.
    pub fn tokenizer_with_options(
        &self,
        name: &str,
        options: TokenizerOptions,
    ) -> TPResult<Tokenizer> {
        let definition = self.definition(ModelId::try_from_name(name)?)?;
        Ok(options.build(definition))
    }

    /// The models built so far, sorted.
    pub fn loaded_models(&self) -> Vec<ModelId> {
        let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
        let mut models: Vec<ModelId> = cache.keys().copied().collect();
        models.sort_unstable();
        models
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        compat::traits::static_is_send_sync_check,
        errors::TokenpressError,
        vocab::{
            RankList,
            utility::testing::{build_test_rank_list, build_test_shift_byte_vocab},
        },
    };

    fn counting_registry() -> (ModelRegistry, Arc<AtomicUsize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = loads.clone();
        let registry = ModelRegistry::new(move |_: ModelId| -> TPResult<RankList<u32>> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(build_test_rank_list(&build_test_shift_byte_vocab(0)))
        });
        (registry, loads)
    }

    #[test]
    fn test_definitions_are_shared() {
        let (registry, loads) = counting_registry();
        static_is_send_sync_check(&registry);
        assert!(registry.loaded_models().is_empty());

        let a = registry.definition(ModelId::Voyage3Base).unwrap();
        let b = registry.definition(ModelId::Voyage3Base).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        let t1 = registry.tokenizer("voyage3_base").unwrap();
        let t2 = registry.tokenizer("voyage3_base").unwrap();
        assert!(Arc::ptr_eq(t1.vocabulary(), t2.vocabulary()));
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        assert_eq!(registry.loaded_models(), vec![ModelId::Voyage3Base]);
        assert!(format!("{registry:?}").contains("Voyage3Base"));
    }

    #[test]
    fn test_errors() {
        let (registry, loads) = counting_registry();

        assert!(matches!(
            registry.tokenizer("gpt-2"),
            Err(TokenpressError::UnknownModel { .. })
        ));
        assert_eq!(loads.load(Ordering::SeqCst), 0);

        let failing = ModelRegistry::new(|_: ModelId| -> TPResult<RankList<u32>> {
            Err(TokenpressError::VocabLoad("offline".to_string()))
        });
        assert!(matches!(
            failing.definition(ModelId::Cl100kBase),
            Err(TokenpressError::VocabLoad(_))
        ));
        assert!(failing.loaded_models().is_empty());
    }
}
