//! Almacenamiento XML en archivos planos
//!
//! Cada tipo de entidad vive en su propio documento XML (Users, PropertyListings,
//! Feedbacks, etc.). Cada operación relee el documento completo, lo modifica en
//! memoria y lo reescribe entero, igual que el backend original. A diferencia de
//! aquel, las escrituras se serializan con un mutex por documento y se aplican
//! vía archivo temporal + rename, de modo que dos escritores concurrentes no
//! pueden pisarse el documento a mitad de camino.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, warn};
use uuid::Uuid;

use crate::utils::errors::{AppError, AppResult};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Un documento XML persistido: colección homogénea de registros planos
/// bajo un elemento raíz fijo.
pub trait Document: Serialize + DeserializeOwned + Default + Send + 'static {
    /// Nombre del elemento raíz ("Users", "PropertyListings", ...)
    const ROOT: &'static str;
    /// Nombre del archivo bajo el directorio de datos
    const FILE: &'static str;
}

/// Store de documentos XML con un lock por archivo
pub struct XmlStore {
    data_dir: PathBuf,
    locks: Mutex<HashMap<&'static str, Arc<Mutex<()>>>>,
}

impl XmlStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn path_for(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    async fn lock_for(&self, file: &'static str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(file)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Cargar un documento completo.
    ///
    /// Nunca falla: archivo ausente o vacío → colección vacía; archivo
    /// ilegible o corrupto → se loguea y se devuelve colección vacía
    /// (política fail-open heredada del sistema original).
    pub async fn load<D: Document>(&self) -> D {
        let path = self.path_for(D::FILE);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return D::default(),
            Err(e) => {
                error!("Error leyendo {}: {}", path.display(), e);
                return D::default();
            }
        };

        if raw.trim().is_empty() {
            return D::default();
        }

        match quick_xml::de::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                // Documento presente pero malformado: se trata como vacío,
                // dejando rastro en el log para no ocultar la corrupción.
                error!("Documento XML corrupto en {}: {}", path.display(), e);
                D::default()
            }
        }
    }

    /// Persistir un documento completo, sobrescribiendo el archivo de forma
    /// atómica (escritura a temporal + rename). Los fallos de escritura SÍ
    /// se propagan: reportar éxito sobre datos perdidos no es aceptable.
    pub async fn save<D: Document>(&self, doc: &D) -> AppResult<()> {
        let body = quick_xml::se::to_string_with_root(D::ROOT, doc)
            .map_err(|e| AppError::Storage(format!("Error serializando {}: {}", D::FILE, e)))?;
        let xml = format!("{}\n{}", XML_DECLARATION, body);

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| {
                AppError::Storage(format!(
                    "Error creando directorio {}: {}",
                    self.data_dir.display(),
                    e
                ))
            })?;

        let path = self.path_for(D::FILE);
        let tmp = self
            .data_dir
            .join(format!(".{}.{}.tmp", D::FILE, Uuid::new_v4()));

        tokio::fs::write(&tmp, xml.as_bytes()).await.map_err(|e| {
            AppError::Storage(format!("Error escribiendo {}: {}", tmp.display(), e))
        })?;

        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            // Limpiar el temporal huérfano antes de reportar el fallo
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                warn!("No se pudo eliminar el temporal {}: {}", tmp.display(), cleanup);
            }
            return Err(AppError::Storage(format!(
                "Error renombrando {} -> {}: {}",
                tmp.display(),
                path.display(),
                e
            )));
        }

        Ok(())
    }

    /// Ciclo leer-modificar-escribir bajo el lock del documento.
    ///
    /// Si el closure falla no se escribe nada; el documento queda intacto.
    pub async fn update<D, F, R>(&self, mutate: F) -> AppResult<R>
    where
        D: Document,
        F: FnOnce(&mut D) -> AppResult<R> + Send,
        R: Send,
    {
        let lock = self.lock_for(D::FILE).await;
        let _guard = lock.lock().await;

        let mut doc = self.load::<D>().await;
        let result = mutate(&mut doc)?;
        self.save(&doc).await?;
        Ok(result)
    }
}
