//! Contract repository and JSON file store
//!
//! The repository is an explicit abstraction injected by callers; there is no
//! process-wide store. `JsonFileStore` persists the whole book to a single
//! pretty-printed JSON document after each mutation and seeds two demo
//! contracts when the document is missing or empty. `MemoryStore` backs tests
//! and ad-hoc batch runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use super::data::{Contract, ContractStatus, NewContract};

/// Storage abstraction for the contract book
pub trait ContractRepository {
    /// Look up a contract by id
    fn get(&self, id: u32) -> Result<Option<Contract>, ContractError>;

    /// All contracts, ordered by id
    fn list(&self) -> Result<Vec<Contract>, ContractError>;

    /// Validate and store a new contract, assigning the next id
    fn create(&mut self, input: NewContract) -> Result<Contract, ContractError>;

    /// Remove a contract; returns false when the id does not exist
    fn delete(&mut self, id: u32) -> Result<bool, ContractError>;
}

fn build_contract(id: u32, input: NewContract) -> Contract {
    Contract {
        id,
        contract_number: input.contract_number,
        contract_date: input.contract_date,
        contract_value: input.contract_value,
        payment_method: input.payment_method,
        client_name: input.client_name,
        description: input.description,
        status: ContractStatus::Pending,
        created_at: chrono::Local::now().naive_local(),
        updated_at: None,
    }
}

/// In-memory repository for tests and batch runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contracts: BTreeMap<u32, Contract>,
    next_id: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { contracts: BTreeMap::new(), next_id: 1 }
    }
}

impl ContractRepository for MemoryStore {
    fn get(&self, id: u32) -> Result<Option<Contract>, ContractError> {
        Ok(self.contracts.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Contract>, ContractError> {
        Ok(self.contracts.values().cloned().collect())
    }

    fn create(&mut self, input: NewContract) -> Result<Contract, ContractError> {
        input.validate()?;
        let id = self.next_id;
        self.next_id += 1;
        let contract = build_contract(id, input);
        self.contracts.insert(id, contract.clone());
        Ok(contract)
    }

    fn delete(&mut self, id: u32) -> Result<bool, ContractError> {
        Ok(self.contracts.remove(&id).is_some())
    }
}

/// On-disk document shape: the contract list plus the id counter
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreDocument {
    contracts: Vec<Contract>,
    next_id: u32,
}

/// File-backed repository persisting to a single JSON document
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    contracts: BTreeMap<u32, Contract>,
    next_id: u32,
}

impl JsonFileStore {
    /// Default store location relative to the working directory
    pub const DEFAULT_PATH: &'static str = "var/contracts.json";

    /// Open the store, loading the existing document or seeding demo data
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ContractError> {
        let path = path.as_ref().to_path_buf();
        let mut store = Self { path, contracts: BTreeMap::new(), next_id: 1 };

        if store.path.exists() {
            let raw = fs::read_to_string(&store.path)?;
            if !raw.trim().is_empty() {
                let doc: StoreDocument = serde_json::from_str(&raw)?;
                store.next_id = doc.next_id;
                for contract in doc.contracts {
                    store.contracts.insert(contract.id, contract);
                }
                info!("loaded {} contracts from {}", store.contracts.len(), store.path.display());
            }
        }

        if store.contracts.is_empty() {
            store.seed();
            store.save()?;
            info!("seeded demo contracts into {}", store.path.display());
        }

        Ok(store)
    }

    /// Open the store at the default location
    pub fn open_default() -> Result<Self, ContractError> {
        Self::open(Self::DEFAULT_PATH)
    }

    fn seed(&mut self) {
        let seed_date = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();
        let demos = [
            (
                "CNT-2025-001",
                10_000.0,
                "PayPal",
                "Cliente ABC",
                "Contrato de servicios profesionales",
                ContractStatus::Active,
            ),
            (
                "CNT-2025-002",
                25_000.0,
                "PayOnline",
                "Empresa XYZ",
                "Contrato de consultoría empresarial",
                ContractStatus::Pending,
            ),
        ];

        for (number, value, method, client, description, status) in demos {
            let id = self.next_id;
            self.next_id += 1;
            self.contracts.insert(
                id,
                Contract {
                    id,
                    contract_number: number.to_string(),
                    contract_date: seed_date,
                    contract_value: value,
                    payment_method: method.to_string(),
                    client_name: Some(client.to_string()),
                    description: Some(description.to_string()),
                    status,
                    created_at: seed_date.and_hms_opt(9, 15, 0).unwrap(),
                    updated_at: None,
                },
            );
        }
    }

    fn save(&self) -> Result<(), ContractError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let doc = StoreDocument {
            contracts: self.contracts.values().cloned().collect(),
            next_id: self.next_id,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}

impl ContractRepository for JsonFileStore {
    fn get(&self, id: u32) -> Result<Option<Contract>, ContractError> {
        Ok(self.contracts.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Contract>, ContractError> {
        Ok(self.contracts.values().cloned().collect())
    }

    fn create(&mut self, input: NewContract) -> Result<Contract, ContractError> {
        input.validate()?;
        let id = self.next_id;
        self.next_id += 1;
        let contract = build_contract(id, input);
        self.contracts.insert(id, contract.clone());
        self.save()?;
        info!("created contract {} ({})", contract.id, contract.contract_number);
        Ok(contract)
    }

    fn delete(&mut self, id: u32) -> Result<bool, ContractError> {
        let removed = self.contracts.remove(&id).is_some();
        if removed {
            self.save()?;
            info!("deleted contract {}", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_contract(number: &str, method: &str) -> NewContract {
        NewContract {
            contract_number: number.to_string(),
            contract_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            contract_value: 12_000.0,
            payment_method: method.to_string(),
            client_name: None,
            description: None,
        }
    }

    fn temp_store_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "contract_store_{}_{}.json",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_memory_store_crud() {
        let mut store = MemoryStore::new();

        let created = store.create(new_contract("CNT-2025-100", "Nequi")).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.status, ContractStatus::Pending);

        let fetched = store.get(1).unwrap().unwrap();
        assert_eq!(fetched.contract_number, "CNT-2025-100");

        assert_eq!(store.list().unwrap().len(), 1);
        assert!(store.delete(1).unwrap());
        assert!(!store.delete(1).unwrap());
        assert!(store.get(1).unwrap().is_none());
    }

    #[test]
    fn test_memory_store_rejects_invalid_input() {
        let mut store = MemoryStore::new();
        let mut input = new_contract("CNT-2025-101", "PayPal");
        input.contract_value = -1.0;
        assert!(store.create(input).is_err());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = MemoryStore::new();
        let first = store.create(new_contract("CNT-2025-102", "PayPal")).unwrap();
        store.delete(first.id).unwrap();
        let second = store.create(new_contract("CNT-2025-103", "PayPal")).unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_json_store_seeds_and_persists() {
        let path = temp_store_path("seed");
        let _ = fs::remove_file(&path);

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            // Fresh store seeds the two demo contracts
            let contracts = store.list().unwrap();
            assert_eq!(contracts.len(), 2);
            assert_eq!(contracts[0].contract_number, "CNT-2025-001");
            assert_eq!(contracts[1].payment_method, "PayOnline");

            store.create(new_contract("CNT-2025-104", "Nequi")).unwrap();
        }

        // Reopen: the created contract survives and ids keep counting
        let store = JsonFileStore::open(&path).unwrap();
        let contracts = store.list().unwrap();
        assert_eq!(contracts.len(), 3);
        assert_eq!(contracts[2].id, 3);
        assert_eq!(contracts[2].payment_method, "Nequi");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_json_store_delete_round_trip() {
        let path = temp_store_path("delete");
        let _ = fs::remove_file(&path);

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            assert!(store.delete(2).unwrap());
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.get(2).unwrap().is_none());
        assert_eq!(store.list().unwrap().len(), 1);

        let _ = fs::remove_file(&path);
    }
}
