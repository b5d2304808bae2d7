// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The CRUD facade.
//!
//! [`DataSource`] composes table resolution, statement building and result
//! mapping over one [`QueryExecutor`]. Every operation is a single
//! round trip:
//!
//! ```text
//! validate → resolve table → build statement → execute → map rows
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use tablemap::prelude::*;
//!
//! #[derive(Debug, Default, Record)]
//! #[record(table = "orders")]
//! struct Order {
//!     id:            Option<i64>,
//!     #[column(name = "cust_name")]
//!     customer_name: Option<String>,
//!     amount:        Option<f64>
//! }
//!
//! let source = DataSource::new(connection);
//! let order: Option<Order> = source.select_by_id(42)?;
//! let big = source.select_list(&Order { amount: Some(100.0), ..Order::default() })?;
//! ```

use std::{collections::BTreeMap, slice};

use tracing::{debug, warn};

use crate::{
    Config, Error, InsertMode, Pagination, PrivilegedWriteService, QueryExecutor, RawRow, Record,
    SqlBuilder, Statement, TableResolver, Value, map_raw_rows, map_rows
};

/// Result of a data-source operation.
pub type Result<T, E> = std::result::Result<T, Error<E>>;

/// Generic data access over one executor handle.
///
/// Holds no state besides the executor and its configuration; two reads of
/// the same row produce two independent records.
#[derive(Debug)]
pub struct DataSource<X> {
    executor: X,
    config:   Config,
    builder:  SqlBuilder
}

impl<X: QueryExecutor> DataSource<X> {
    /// Create a data source with the default configuration.
    pub fn new(executor: X) -> Self {
        Self::with_config(executor, Config::default())
    }

    /// Create a data source with `config`.
    pub fn with_config(executor: X, config: Config) -> Self {
        let builder = SqlBuilder::new(config.dialect);
        Self {
            executor,
            config,
            builder
        }
    }

    /// The executor handle.
    pub const fn executor(&self) -> &X {
        &self.executor
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Give the executor back.
    pub fn into_inner(self) -> X {
        self.executor
    }

    /// Table resolver bound to this data source.
    pub fn resolver(&self) -> TableResolver<'_, X> {
        TableResolver::new(&self.executor, &self.config.mapping, self.config.dialect)
    }

    /// Physical table of `R`.
    ///
    /// # Errors
    ///
    /// Configuration errors, see [`TableResolver::table_name`].
    pub fn table_name<R: Record>(&self) -> Result<String, X::Error> {
        self.resolver().table_name(R::record_type())
    }

    /// Table name registered in the mapping table for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Executor`] if the lookup fails.
    pub fn mapping_table_name(&self, key: &str) -> Result<Option<String>, X::Error> {
        self.resolver().mapping_table_name(key)
    }

    /// Workflow id registered in the mapping table for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Executor`] if the lookup fails.
    pub fn mapping_workflow_id(&self, key: &str) -> Result<Option<String>, X::Error> {
        self.resolver().mapping_workflow_id(key)
    }

    /// Fetch the record whose id column equals `id`.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if `id` is null or blank
    /// - configuration, decode and executor errors
    pub fn select_by_id<R: Record>(&self, id: impl Into<Value>) -> Result<Option<R>, X::Error> {
        let id = id.into();
        if id.is_blank() {
            return Err(Error::validation("parameter `id` must not be empty"));
        }
        let record_type = R::record_type();
        let table = self.table_name::<R>()?;
        let statement = self
            .builder
            .select_by_id(&table, record_type.id_column(), id);
        Ok(self.fetch::<R>(&statement)?.into_iter().next())
    }

    /// Fetch the single record matching `condition`.
    ///
    /// # Errors
    ///
    /// - [`Error::Cardinality`] if more than one row matches
    /// - configuration, decode and executor errors
    pub fn select_one<R: Record>(&self, condition: &R) -> Result<Option<R>, X::Error> {
        let mut records = self.select_list(condition)?;
        if records.len() > 1 {
            warn!(
                record = R::record_type().name(),
                count = records.len(),
                "select_one matched more than one row"
            );
            return Err(Error::Cardinality {
                count: records.len()
            });
        }
        Ok(records.pop())
    }

    /// Fetch every record matching `condition`.
    ///
    /// Null attributes of `condition` do not filter; an all-null condition
    /// matches every row.
    ///
    /// # Errors
    ///
    /// Configuration, decode and executor errors.
    pub fn select_list<R: Record>(&self, condition: &R) -> Result<Vec<R>, X::Error> {
        let table = self.table_name::<R>()?;
        let conditions = column_values(condition.conditions());
        let statement = self.builder.select_by_condition(&table, &conditions);
        self.fetch(&statement)
    }

    /// Fetch one page of records matching `condition`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for a negative limit or offset, before any
    /// statement runs. Configuration, decode and executor errors otherwise.
    pub fn select_page<R: Record>(
        &self,
        condition: &R,
        page: Pagination
    ) -> Result<Vec<R>, X::Error> {
        if page.limit < 0 || page.offset < 0 {
            return Err(Error::validation(format!(
                "negative page window: limit {}, offset {}",
                page.limit, page.offset
            )));
        }
        let table = self.table_name::<R>()?;
        let conditions = column_values(condition.conditions());
        let statement = self.builder.select_page(&table, &conditions, page);
        self.fetch(&statement)
    }

    /// Run caller SQL and map the first row into `R`.
    ///
    /// # Errors
    ///
    /// Decode and executor errors.
    pub fn query_one<R: Record>(&self, sql: &str, params: &[Value]) -> Result<Option<R>, X::Error> {
        Ok(self.query_list(sql, params)?.into_iter().next())
    }

    /// Run caller SQL and map every row into `R`.
    ///
    /// # Errors
    ///
    /// Decode and executor errors.
    pub fn query_list<R: Record>(&self, sql: &str, params: &[Value]) -> Result<Vec<R>, X::Error> {
        self.fetch(&Statement::new(sql, params.to_vec()))
    }

    /// Run caller SQL and return the first row untyped.
    ///
    /// # Errors
    ///
    /// Executor errors.
    pub fn query_raw_one(&self, sql: &str, params: &[Value]) -> Result<Option<RawRow>, X::Error> {
        Ok(self.query_raw(sql, params)?.into_iter().next())
    }

    /// Run caller SQL and return every row untyped.
    ///
    /// # Errors
    ///
    /// Executor errors.
    pub fn query_raw(&self, sql: &str, params: &[Value]) -> Result<Vec<RawRow>, X::Error> {
        let statement = Statement::new(sql, params.to_vec());
        let mut cursor = self.query(&statement)?;
        Ok(map_raw_rows(&mut cursor))
    }

    /// Insert one record.
    ///
    /// # Errors
    ///
    /// Configuration and executor errors.
    pub fn save<R: Record>(&self, record: &R) -> Result<bool, X::Error> {
        self.batch_save(slice::from_ref(record))
    }

    /// Insert every record with one statement, one value tuple per record
    /// in input order.
    ///
    /// Returns `Ok(false)` without executing anything for an empty batch.
    ///
    /// # Errors
    ///
    /// Configuration and executor errors.
    pub fn batch_save<R: Record>(&self, records: &[R]) -> Result<bool, X::Error> {
        if records.is_empty() {
            return Ok(false);
        }
        let table = self.table_name::<R>()?;
        let columns: Vec<&str> = R::record_type()
            .attributes()
            .into_iter()
            .map(|attribute| attribute.column_name())
            .collect();
        let rows: Vec<Vec<Value>> = records
            .iter()
            .map(|record| {
                record
                    .values()
                    .into_iter()
                    .map(|(_, value)| value)
                    .collect()
            })
            .collect();
        let Some(statement) = self
            .builder
            .insert(&table, &columns, &rows, self.config.insert_mode)
        else {
            return Ok(false);
        };
        match self.config.insert_mode {
            InsertMode::Bound => self.update(&statement),
            InsertMode::Literal => self.execute(&statement)
        }
    }

    /// Hand `record` to a privileged write service instead of inserting it
    /// directly.
    ///
    /// The service receives resolved column names mapped to value text for
    /// every non-null, non-blank attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Executor`] carrying the service error.
    pub fn insert_privileged<R: Record, S: PrivilegedWriteService>(
        &self,
        service: &S,
        record: &R,
        mode_id: &str,
        user: &str
    ) -> Result<String, S::Error> {
        let fields: BTreeMap<String, String> = record
            .values()
            .into_iter()
            .filter(|(_, value)| !value.is_blank())
            .filter_map(|(attribute, value)| {
                value
                    .to_literal()
                    .map(|text| (attribute.column_name().to_string(), text))
            })
            .collect();
        debug!(
            record = R::record_type().name(),
            mode_id,
            user,
            fields = fields.len(),
            "submitting privileged insert"
        );
        service
            .submit(user, mode_id, &fields)
            .map_err(Error::Executor)
    }

    /// Update the row identified by the record's id attribute.
    ///
    /// Every non-null attribute other than the id is assigned; null ones
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the record has no id attribute or its id
    ///   is null or blank
    /// - configuration and executor errors
    pub fn update_by_id<R: Record>(&self, record: &R) -> Result<bool, X::Error> {
        let record_type = R::record_type();
        let Some(id_attribute) = record_type.id_attribute() else {
            return Err(Error::validation(format!(
                "record `{}` has no id attribute",
                record_type.name()
            )));
        };
        let id = record.get(id_attribute.name()).unwrap_or(Value::Null);
        if id.is_blank() {
            return Err(Error::validation(format!(
                "id attribute `{}` must not be empty",
                id_attribute.name()
            )));
        }
        let table = self.table_name::<R>()?;
        let assignments: Vec<(&str, Value)> = record
            .conditions()
            .into_iter()
            .filter(|(attribute, _)| attribute.name() != id_attribute.name())
            .map(|(attribute, value)| (attribute.column_name(), value))
            .collect();
        let statement =
            self.builder
                .update_by_id(&table, id_attribute.column_name(), id, &assignments);
        self.update(&statement)
    }

    /// Delete every row matching `condition`.
    ///
    /// # Errors
    ///
    /// - [`Error::Guard`] if `condition` has no non-null attribute; nothing
    ///   is executed
    /// - configuration and executor errors
    pub fn delete<R: Record>(&self, condition: &R) -> Result<bool, X::Error> {
        let conditions = column_values(condition.conditions());
        if conditions.is_empty() {
            let record = R::record_type().name();
            warn!(record, "refused unconditional delete");
            return Err(Error::Guard {
                record
            });
        }
        let table = self.table_name::<R>()?;
        match self.builder.delete(&table, &conditions) {
            Some(statement) => self.update(&statement),
            None => Err(Error::Guard {
                record: R::record_type().name()
            })
        }
    }

    fn fetch<R: Record>(&self, statement: &Statement) -> Result<Vec<R>, X::Error> {
        let mut cursor = self.query(statement)?;
        let records = map_rows(&mut cursor)?;
        debug!(rows = records.len(), "mapped result rows");
        Ok(records)
    }

    fn query(&self, statement: &Statement) -> Result<X::Cursor, X::Error> {
        debug!(sql = %statement.sql, params = statement.params.len(), "executing query");
        self.executor
            .execute_query(&statement.sql, &statement.params)
            .map_err(Error::Executor)
    }

    fn update(&self, statement: &Statement) -> Result<bool, X::Error> {
        debug!(sql = %statement.sql, params = statement.params.len(), "executing update");
        self.executor
            .execute_update(&statement.sql, &statement.params)
            .map_err(Error::Executor)
    }

    fn execute(&self, statement: &Statement) -> Result<bool, X::Error> {
        debug!(sql = %statement.sql, "executing statement");
        self.executor
            .execute(&statement.sql)
            .map_err(Error::Executor)
    }
}

fn column_values(
    values: Vec<(&'static crate::Attribute, Value)>
) -> Vec<(&'static str, Value)> {
    values
        .into_iter()
        .map(|(attribute, value)| (attribute.column_name(), value))
        .collect()
}
