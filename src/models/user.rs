use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Documento da collection "user". Campos ausentes no formulário
/// ficam ausentes no documento.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub ssc_certificate: String,  // uploads/<epoch-ms>-<nome original>
}

/// Campos de texto do formulário de inscrição
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub message: Option<String>,
}

impl SubmissionForm {
    /// Aplica um campo de texto pelo nome do formulário.
    /// Retorna `false` para nomes desconhecidos. O primeiro valor vence.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "fullName" => &mut self.full_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "course" => &mut self.course,
            "message" => &mut self.message,
            _ => return false,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
        true
    }

    pub fn into_record(self, ssc_certificate: String) -> UserRecord {
        UserRecord {
            id: None,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            course: self.course,
            message: self.message,
            ssc_certificate,
        }
    }
}

/// Anexo `sscCertificate` lido do multipart
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Registro como devolvido pela API (`_id` em hex)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub ssc_certificate: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            course: user.course,
            message: user.message,
            ssc_certificate: user.ssc_certificate,
        }
    }
}
