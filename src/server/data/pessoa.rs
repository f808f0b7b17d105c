//! Person data repository for database operations.
//!
//! This module provides the `PessoaRepository` for owners, tenants and inspectors. A person
//! is always read together with their address, and both rows are written in one
//! transaction.

use entity::sea_orm_active_enums::RolePessoa;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::endereco,
    model::pessoa::{CreatePessoaParams, Pessoa, UpdatePessoaParams},
};

/// Repository providing database operations for people and their addresses.
pub struct PessoaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PessoaRepository<'a> {
    /// Creates a new PessoaRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PessoaRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a person and their address in one transaction.
    ///
    /// # Arguments
    /// - `id` - Primary key for the person
    /// - `endereco_id` - Primary key for the address
    /// - `params` - Validated person and address fields
    ///
    /// # Returns
    /// - `Ok(Pessoa)` - The created person with address
    /// - `Err(DbErr)` - Either insert failed; nothing is written
    pub async fn create(
        &self,
        id: String,
        endereco_id: String,
        params: CreatePessoaParams,
    ) -> Result<Pessoa, DbErr> {
        let txn = self.db.begin().await?;

        let endereco = endereco::insert(&txn, endereco_id, params.endereco).await?;

        let pessoa = entity::pessoa::ActiveModel {
            id: ActiveValue::Set(id),
            cpf: ActiveValue::Set(params.cpf),
            first_name: ActiveValue::Set(params.nome.first_name),
            middle_name: ActiveValue::Set(params.nome.middle_name),
            last_name: ActiveValue::Set(params.nome.last_name),
            email: ActiveValue::Set(params.email),
            tel: ActiveValue::Set(params.tel),
            birth_date: ActiveValue::Set(params.birth_date),
            tipo: ActiveValue::Set(params.tipo),
            endereco_id: ActiveValue::Set(endereco.id.clone()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Pessoa {
            id: pessoa.id,
            cpf: pessoa.cpf,
            first_name: pessoa.first_name,
            middle_name: pessoa.middle_name,
            last_name: pessoa.last_name,
            email: pessoa.email,
            tel: pessoa.tel,
            birth_date: pessoa.birth_date,
            tipo: pessoa.tipo,
            endereco,
        })
    }

    /// Applies a partial update to a person and, when given, their address.
    ///
    /// # Returns
    /// - `Ok(Some(Pessoa))` - Updated person with address
    /// - `Ok(None)` - No person with that id
    /// - `Err(DbErr)` - Update failed; nothing is written
    pub async fn update(&self, params: UpdatePessoaParams) -> Result<Option<Pessoa>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Pessoa::find_by_id(params.id.clone())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };
        let endereco_id = existing.endereco_id.clone();

        let mut active: entity::pessoa::ActiveModel = existing.into();
        if let Some(cpf) = params.cpf {
            active.cpf = ActiveValue::Set(cpf);
        }
        if let Some(nome) = params.nome {
            active.first_name = ActiveValue::Set(nome.first_name);
            active.middle_name = ActiveValue::Set(nome.middle_name);
            active.last_name = ActiveValue::Set(nome.last_name);
        }
        if let Some(tel) = params.tel {
            active.tel = ActiveValue::Set(tel);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(birth_date) = params.birth_date {
            active.birth_date = ActiveValue::Set(birth_date);
        }
        if let Some(tipo) = params.tipo {
            active.tipo = ActiveValue::Set(tipo);
        }
        let pessoa = active.update(&txn).await?;

        if let Some(endereco) = params.endereco {
            entity::endereco_pessoa::ActiveModel {
                id: ActiveValue::Unchanged(endereco_id.clone()),
                rua: ActiveValue::Set(endereco.rua),
                complemento: ActiveValue::Set(endereco.complemento),
                numero: ActiveValue::Set(endereco.numero),
                bairro: ActiveValue::Set(endereco.bairro),
                cidade: ActiveValue::Set(endereco.cidade),
                estado: ActiveValue::Set(endereco.estado),
                cep: ActiveValue::Set(endereco.cep),
            }
            .update(&txn)
            .await?;
        }

        let endereco = entity::prelude::EnderecoPessoa::find_by_id(endereco_id)
            .one(&txn)
            .await?;

        txn.commit().await?;

        Pessoa::from_entity(pessoa, endereco).map(Some)
    }

    /// Gets every person with their address, ordered by first name.
    pub async fn get_all(&self) -> Result<Vec<Pessoa>, DbErr> {
        let rows = entity::prelude::Pessoa::find()
            .find_also_related(entity::prelude::EnderecoPessoa)
            .order_by_asc(entity::pessoa::Column::FirstName)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(pessoa, endereco)| Pessoa::from_entity(pessoa, endereco))
            .collect()
    }

    /// Finds a person with their address.
    ///
    /// # Returns
    /// - `Ok(Some(Pessoa))` - Person found
    /// - `Ok(None)` - No person with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Pessoa>, DbErr> {
        let row = entity::prelude::Pessoa::find_by_id(id.to_string())
            .find_also_related(entity::prelude::EnderecoPessoa)
            .one(self.db)
            .await?;

        row.map(|(pessoa, endereco)| Pessoa::from_entity(pessoa, endereco))
            .transpose()
    }

    /// Finds several people at once. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: Vec<String>) -> Result<Vec<Pessoa>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Pessoa::find()
            .filter(entity::pessoa::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::EnderecoPessoa)
            .order_by_asc(entity::pessoa::Column::FirstName)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(pessoa, endereco)| Pessoa::from_entity(pessoa, endereco))
            .collect()
    }

    /// Gets every person with the given role.
    pub async fn find_by_tipo(&self, tipo: RolePessoa) -> Result<Vec<Pessoa>, DbErr> {
        let rows = entity::prelude::Pessoa::find()
            .filter(entity::pessoa::Column::Tipo.eq(tipo))
            .find_also_related(entity::prelude::EnderecoPessoa)
            .order_by_asc(entity::pessoa::Column::FirstName)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(pessoa, endereco)| Pessoa::from_entity(pessoa, endereco))
            .collect()
    }

    /// Gets every person whose address is in the given city and state.
    pub async fn find_by_cidade_estado(
        &self,
        cidade: &str,
        estado: &str,
    ) -> Result<Vec<Pessoa>, DbErr> {
        let rows = entity::prelude::Pessoa::find()
            .find_also_related(entity::prelude::EnderecoPessoa)
            .filter(entity::endereco_pessoa::Column::Cidade.eq(cidade))
            .filter(entity::endereco_pessoa::Column::Estado.eq(estado))
            .order_by_asc(entity::pessoa::Column::FirstName)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(pessoa, endereco)| Pessoa::from_entity(pessoa, endereco))
            .collect()
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Pessoa::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email belongs to someone other than `except_id`.
    pub async fn email_in_use(&self, email: &str, except_id: Option<&str>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Pessoa::find().filter(entity::pessoa::Column::Email.eq(email));
        if let Some(id) = except_id {
            query = query.filter(entity::pessoa::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Deletes a person and their address.
    ///
    /// Links, rentals and inspections referencing the person follow the foreign key rules.
    ///
    /// # Returns
    /// - `Ok(true)` - Person deleted
    /// - `Ok(false)` - No person with that id
    /// - `Err(DbErr)` - Delete failed; nothing is removed
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(pessoa) = entity::prelude::Pessoa::find_by_id(id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(false);
        };

        entity::prelude::Pessoa::delete_by_id(pessoa.id)
            .exec(&txn)
            .await?;
        entity::prelude::EnderecoPessoa::delete_by_id(pessoa.endereco_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
