//! # Console View
//!
//! Formats every screen of the REPL and writes it to the injected writer.

use super::styler::Styler;
use crate::repl::models::{CountryCatalog, CountryCode, CountryInfo, HistoryEntry};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Codes shown per row in the country list
pub const CODES_PER_ROW: usize = 8;

const LIST_RULE_WIDTH: usize = 50;
const DETAIL_RULE_WIDTH: usize = 40;

/// One labelled line of the detail view and the export file
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(icon: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            icon,
            label,
            value: value.into(),
        }
    }
}

/// Fields of a country in display order; the flag only when the service sent one
pub fn detail_fields(info: &CountryInfo) -> Vec<DetailField> {
    let mut fields = vec![
        DetailField::new("🌍", "País", info.name.as_str()),
        DetailField::new("🏙️", "Capital", info.capital.as_str()),
        DetailField::new("💰", "Moneda", info.currency.as_str()),
        DetailField::new("🗣️", "Idiomas", info.languages_joined()),
        DetailField::new("📞", "Código telefónico", info.phone_display()),
        DetailField::new("🗺️", "Continente", info.continent.as_str()),
    ];
    if info.has_flag() {
        fields.push(DetailField::new("🚩", "Bandera", info.flag_url.as_str()));
    }
    fields
}

/// Rows of the country list, `CODES_PER_ROW` codes each
pub fn country_rows(codes: &[CountryCode]) -> Vec<String> {
    codes
        .chunks(CODES_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|code| format!("{:3}", code))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

pub struct ConsoleView<W: Write> {
    writer: W,
    styler: Box<dyn Styler>,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(writer: W, styler: Box<dyn Styler>) -> Self {
        Self { writer, styler }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    pub fn banner(&mut self) -> Result<()> {
        let title = self.styler.heading("🌍 Consultor de Información de Países");
        self.line(&title)?;
        self.line(&"=".repeat(DETAIL_RULE_WIDTH))?;
        self.line("Conectando al servicio SOAP...")?;
        self.line("\nObteniendo lista de países...")
    }

    pub fn connected(&mut self) -> Result<()> {
        let text = self.styler.success("✅ Conexión exitosa al servicio SOAP");
        self.line(&text)
    }

    pub fn startup_failed(&mut self) -> Result<()> {
        let text = self
            .styler
            .error("❌ No se pudieron obtener los códigos de países.");
        self.line(&text)?;
        let hint = self.styler.hint("💡 Verifique su conexión a internet.");
        self.line(&hint)
    }

    pub fn country_list(&mut self, catalog: &CountryCatalog) -> Result<()> {
        let heading = self.styler.heading("📋 Códigos ISO de países disponibles:");
        self.line(&format!("\n{}", heading))?;
        self.line(&"=".repeat(LIST_RULE_WIDTH))?;
        for row in country_rows(catalog.codes()) {
            let row = self.styler.accent(&row);
            self.line(&row)?;
        }
        self.line(&format!("\nTotal de países: {}", catalog.len()))
    }

    pub fn help(&mut self) -> Result<()> {
        let heading = self.styler.heading("📖 Comandos disponibles:");
        self.line(&format!("\n{}", heading))?;
        let commands = [
            ("<código>", "Consultar un país por su código ISO (ej. PE, US, ES)"),
            ("lista, list", "Mostrar los códigos disponibles"),
            ("historial, history", "Mostrar las últimas búsquedas"),
            ("exportar, export", "Guardar el historial en un archivo de texto"),
            ("ayuda, help", "Mostrar esta ayuda"),
            ("salir, exit, quit", "Terminar el programa"),
        ];
        for (command, description) in commands {
            let command = self.styler.label(&format!("{:<20}", command));
            self.line(&format!("  {} {}", command, description))?;
        }
        Ok(())
    }

    pub fn prompt(&mut self) -> Result<()> {
        let text = self
            .styler
            .label("📝 Ingrese código ISO del país (o 'ayuda' para ver comandos): ");
        write!(self.writer, "\n{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn farewell(&mut self) -> Result<()> {
        self.line("👋 ¡Hasta luego!")
    }

    /// Farewell after Ctrl+C, on a fresh line
    pub fn interrupted(&mut self) -> Result<()> {
        self.line("")?;
        self.farewell()
    }

    pub fn empty_input(&mut self) -> Result<()> {
        let text = self.styler.error("❌ Por favor ingrese un código válido.");
        self.line(&text)
    }

    pub fn unknown_code(&mut self, raw: &str) -> Result<()> {
        let text = self.styler.error(&format!(
            "❌ El código '{}' no está en la lista de países disponibles.",
            raw
        ));
        self.line(&text)?;
        let hint = self
            .styler
            .hint("💡 Sugerencia: Use códigos de 2 letras como 'US', 'PE', 'ES', etc.");
        self.line(&hint)
    }

    pub fn searching(&mut self, code: &CountryCode) -> Result<()> {
        self.line(&format!("\n🔍 Buscando información para {}...", code))
    }

    pub fn lookup_failed(&mut self, code: &CountryCode, cause: &str) -> Result<()> {
        let text = self.styler.error(&format!(
            "❌ No se pudo obtener información para el código '{}'",
            code
        ));
        self.line(&text)?;
        let cause = self.styler.hint(&format!("   {}", cause));
        self.line(&cause)
    }

    pub fn country_details(&mut self, code: &CountryCode, info: &CountryInfo) -> Result<()> {
        let heading = self
            .styler
            .heading(&format!("🌍 Información del país ({}):", code));
        self.line(&format!("\n{}", heading))?;
        self.line(&"=".repeat(DETAIL_RULE_WIDTH))?;
        for field in detail_fields(info) {
            let label = self.styler.label(&format!("{} {}:", field.icon, field.label));
            self.line(&format!("{} {}", label, field.value))?;
        }
        Ok(())
    }

    pub fn history<'a>(&mut self, entries: impl IntoIterator<Item = &'a HistoryEntry>) -> Result<()> {
        let heading = self.styler.heading("📜 Historial de búsquedas:");
        self.line(&format!("\n{}", heading))?;

        let mut shown = 0;
        for (index, entry) in entries.into_iter().enumerate() {
            self.line(&format!(
                "{}. {} - {} ({})",
                index + 1,
                entry.code,
                entry.name(),
                entry.timestamp_display()
            ))?;
            shown += 1;
        }
        if shown == 0 {
            let hint = self.styler.hint("No hay búsquedas todavía.");
            self.line(&hint)?;
        }
        Ok(())
    }

    pub fn exported(&mut self, path: &Path, count: usize) -> Result<()> {
        let text = self.styler.success(&format!(
            "✅ Historial exportado a {} ({} consultas)",
            path.display(),
            count
        ));
        self.line(&text)
    }

    pub fn export_failed(&mut self, path: &Path, cause: &str) -> Result<()> {
        let text = self.styler.error(&format!(
            "❌ No se pudo exportar el historial a {}: {}",
            path.display(),
            cause
        ));
        self.line(&text)
    }

    pub fn unexpected_error(&mut self, cause: &str) -> Result<()> {
        let text = self.styler.error(&format!("❌ Error inesperado: {}", cause));
        self.line(&text)
    }
}
