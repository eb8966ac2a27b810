use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecoratorError {
    #[error("{type_name} has not implemented method '{method}'")]
    NotImplemented {
        type_name: String,
        method: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 缺少覆寫等程式錯誤，不做恢復
    Programming,
    Runtime,
}

impl DecoratorError {
    pub fn not_implemented<T: ?Sized>(method: &'static str) -> Self {
        Self::NotImplemented {
            type_name: short_type_name::<T>().to_string(),
            method,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotImplemented { .. } => ErrorCategory::Programming,
            Self::IoError(_) => ErrorCategory::Runtime,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotImplemented { type_name, method } => {
                format!("Component '{}' is missing an override for '{}'", type_name, method)
            }
            Self::IoError(e) => format!("Failed to write output: {}", e),
        }
    }
}

/// Strips the module path from `std::any::type_name`, keeping generic arguments readable.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

pub type Result<T> = std::result::Result<T, DecoratorError>;
