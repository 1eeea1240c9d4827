//! Generación de identificadores de aplicación
//!
//! Los registros del dominio usan ids de texto elegidos por la aplicación:
//! la matrícula slugificada para vehículos y prefijo + dígitos aleatorios
//! para el resto.

use rand::Rng;

/// Convertir una matrícula o nombre en un id slugificado
///
/// "ABC-123 DEF" -> "abc-123-def"
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut last_dash = true; // evita guión inicial

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Generar un id con prefijo + 6 dígitos aleatorios (ej. "TRP-482913")
pub fn generate_id(prefix: &str) -> String {
    let digits: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{}-{:06}", prefix, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_license_plate() {
        assert_eq!(slugify("ABC-123"), "abc-123");
        assert_eq!(slugify("  AB 12 CD  "), "ab-12-cd");
        assert_eq!(slugify("ÑU***99"), "u-99");
    }

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("DRV");
        assert!(id.starts_with("DRV-"));
        assert_eq!(id.len(), 10);
        assert!(id[4..].chars().all(|c| c.is_ascii_digit()));
    }
}
