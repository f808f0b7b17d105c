//! Person domain models and parameters.
//!
//! A person is an owner, tenant or inspector. Every person has exactly one address,
//! which is created, updated and deleted together with it.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::RolePessoa;
use sea_orm::DbErr;

use crate::{
    model::pessoa::{CreatePessoaDto, PessoaDto, PessoasAgrupadasDto, UpdatePessoaDto},
    server::{
        error::AppError,
        model::endereco::{non_blank, Endereco, EnderecoParams},
        util::{
            date::parse_br_date,
            parse::{digits_only, join_name, split_full_name, NomeCompleto},
        },
    },
};

pub const MISSING_DATA_MESSAGE: &str = "Por favor, forneça todos os dados necessários.";
pub const INVALID_BIRTH_DATE_MESSAGE: &str =
    "Por favor, forneça uma data de nascimento válida no formato DD/MM/AAAA.";

/// Person together with their address.
#[derive(Debug, Clone, PartialEq)]
pub struct Pessoa {
    pub id: String,
    pub cpf: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub tel: String,
    pub birth_date: NaiveDate,
    pub tipo: RolePessoa,
    pub endereco: Endereco,
}

impl Pessoa {
    /// Converts the person row and its joined address at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Pessoa)` - Person with address
    /// - `Err(DbErr::RecordNotFound)` - Address row missing for the person
    pub fn from_entity(
        entity: entity::pessoa::Model,
        endereco: Option<entity::endereco_pessoa::Model>,
    ) -> Result<Self, DbErr> {
        let endereco = endereco.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Endereço {} da pessoa {} não encontrado",
                entity.endereco_id, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            cpf: entity.cpf,
            first_name: entity.first_name,
            middle_name: entity.middle_name,
            last_name: entity.last_name,
            email: entity.email,
            tel: entity.tel,
            birth_date: entity.birth_date,
            tipo: entity.tipo,
            endereco: Endereco::from_entity(endereco),
        })
    }

    pub fn full_name(&self) -> String {
        join_name(
            &self.first_name,
            self.middle_name.as_deref(),
            self.last_name.as_deref(),
        )
    }

    pub fn into_dto(self) -> PessoaDto {
        let full_name = self.full_name();

        PessoaDto {
            id: self.id,
            cpf: self.cpf,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            full_name,
            email: self.email,
            tel: self.tel,
            birth_date: self.birth_date,
            tipo: self.tipo,
            endereco: self.endereco.into_dto(),
        }
    }
}

/// People split by role for the grouped listing.
#[derive(Debug, Clone, Default)]
pub struct PessoasAgrupadas {
    pub proprietarios: Vec<Pessoa>,
    pub inquilinos: Vec<Pessoa>,
    pub vistoriadores: Vec<Pessoa>,
}

impl PessoasAgrupadas {
    pub fn from_pessoas(pessoas: Vec<Pessoa>) -> Self {
        let mut grouped = Self::default();

        for pessoa in pessoas {
            match pessoa.tipo {
                RolePessoa::Proprietario => grouped.proprietarios.push(pessoa),
                RolePessoa::Inquilino => grouped.inquilinos.push(pessoa),
                RolePessoa::Vistoriador => grouped.vistoriadores.push(pessoa),
            }
        }

        grouped
    }

    pub fn into_dto(self) -> PessoasAgrupadasDto {
        PessoasAgrupadasDto {
            proprietarios: self.proprietarios.into_iter().map(Pessoa::into_dto).collect(),
            inquilinos: self.inquilinos.into_iter().map(Pessoa::into_dto).collect(),
            vistoriadores: self.vistoriadores.into_iter().map(Pessoa::into_dto).collect(),
        }
    }
}

/// Validated data for a new person and their address.
#[derive(Debug, Clone)]
pub struct CreatePessoaParams {
    pub cpf: String,
    pub nome: NomeCompleto,
    /// Digits only.
    pub tel: String,
    pub email: Option<String>,
    pub birth_date: NaiveDate,
    pub tipo: RolePessoa,
    pub endereco: EnderecoParams,
}

impl CreatePessoaParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreatePessoaParams)` - All required data present
    /// - `Err(AppError::BadRequest)` - Missing field, incomplete address or birth date
    ///   not in `DD/MM/AAAA`
    pub fn from_dto(dto: CreatePessoaDto) -> Result<Self, AppError> {
        let missing = || AppError::BadRequest(MISSING_DATA_MESSAGE.to_string());

        let cpf = non_blank(dto.cpf).ok_or_else(missing)?;
        let nome = dto
            .full_name
            .as_deref()
            .and_then(split_full_name)
            .ok_or_else(missing)?;
        let tel = non_blank(dto.tel).ok_or_else(missing)?;
        let birth_date = non_blank(dto.birth_date).ok_or_else(missing)?;
        let tipo = dto.tipo.ok_or_else(missing)?;
        let endereco = dto
            .endereco
            .and_then(EnderecoParams::from_dto)
            .ok_or_else(missing)?;

        let birth_date = parse_br_date(&birth_date)
            .ok_or_else(|| AppError::BadRequest(INVALID_BIRTH_DATE_MESSAGE.to_string()))?;

        Ok(Self {
            cpf,
            nome,
            tel: digits_only(&tel),
            email: normalize_email(dto.email),
            birth_date,
            tipo,
            endereco,
        })
    }
}

/// Emails are stored trimmed and lowercased so uniqueness ignores case.
fn normalize_email(email: Option<String>) -> Option<String> {
    non_blank(email).map(|email| email.trim().to_lowercase())
}

/// Partial update of a person. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePessoaParams {
    pub id: String,
    pub cpf: Option<String>,
    pub nome: Option<NomeCompleto>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub tipo: Option<RolePessoa>,
    pub endereco: Option<EnderecoParams>,
}

impl UpdatePessoaParams {
    /// Validates an update request.
    ///
    /// A nested address, when sent, must be complete.
    ///
    /// # Returns
    /// - `Ok(UpdatePessoaParams)` - Valid partial update
    /// - `Err(AppError::BadRequest)` - Bad birth date or incomplete address
    pub fn from_dto(dto: UpdatePessoaDto) -> Result<Self, AppError> {
        let birth_date = match non_blank(dto.birth_date) {
            Some(value) => Some(
                parse_br_date(&value)
                    .ok_or_else(|| AppError::BadRequest(INVALID_BIRTH_DATE_MESSAGE.to_string()))?,
            ),
            None => None,
        };

        let endereco = match dto.endereco {
            Some(endereco) => Some(
                EnderecoParams::from_dto(endereco)
                    .ok_or_else(|| AppError::BadRequest(MISSING_DATA_MESSAGE.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            id: dto.id,
            cpf: non_blank(dto.cpf),
            nome: dto.full_name.as_deref().and_then(split_full_name),
            tel: non_blank(dto.tel).map(|tel| digits_only(&tel)),
            email: normalize_email(dto.email),
            birth_date,
            tipo: dto.tipo,
            endereco,
        })
    }
}
