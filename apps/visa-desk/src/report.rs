//! Terminal rendering of an analysis: summary, checklist, sales panels

use crate::config::DeskConfig;
use crate::session::ChecklistSession;
use shared_types::Analysis;
use std::fmt;

pub struct DeskReport<'a> {
    pub analysis: &'a Analysis,
    pub session: &'a ChecklistSession,
    pub config: &'a DeskConfig,
}

impl<'a> DeskReport<'a> {
    pub fn new(
        analysis: &'a Analysis,
        session: &'a ChecklistSession,
        config: &'a DeskConfig,
    ) -> Self {
        Self {
            analysis,
            session,
            config,
        }
    }
}

impl fmt::Display for DeskReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;

        writeln!(f, "🛡️  Mevzuat Analiz Paneli | {}", self.config.region)?;
        if let Some(name) = &analysis.file_name {
            writeln!(f, "📄 {}", name)?;
        }
        writeln!(f)?;

        writeln!(f, "📌 Mevzuat Özeti")?;
        writeln!(f, "   Vize Ücreti   : {}", analysis.fees.join(" / "))?;
        writeln!(f, "   Sigorta Limiti: {}", analysis.insurance_limit)?;
        writeln!(f)?;

        writeln!(f, "🚦 Kritik Kurallar")?;
        for rule in &analysis.critical_rules {
            writeln!(f, "   • {}", rule)?;
        }
        writeln!(f)?;

        write!(f, "{}", ChecklistPanel(self.session))?;
        writeln!(f)?;

        writeln!(f, "💰 Satış Fırsatları")?;
        let offers = &self.config.offers;
        let upsells = analysis.upsells;
        if upsells.insurance {
            writeln!(f, "   🏥 Seyahat Sigortası Fırsatı")?;
            writeln!(
                f,
                "      Mevzuat zorunlu kılıyor. {} teminatlı sigorta satışı yapmayı unutma!",
                offers.insurance_coverage
            )?;
            writeln!(f, "      Ort. Kazanç: {}", offers.insurance_earning)?;
        }
        if upsells.flight_hotel {
            writeln!(f, "   ✈️  Rezervasyon Desteği")?;
            writeln!(
                f,
                "      Uçak/Otel rezervasyon kanıtı isteniyor. Geçici rezervasyon hizmeti öner."
            )?;
            writeln!(f, "      Hizmet Bedeli: {}", offers.reservation_fee)?;
        }
        if upsells.vip {
            writeln!(f, "   ⭐ VIP Hizmet")?;
            writeln!(f, "      Doküman VIP/eksper hizmetinden bahsediyor. Premium paketi öner.")?;
        }
        if !upsells.any() {
            writeln!(f, "   Fırsat bulunamadı.")?;
        }

        Ok(())
    }
}

/// Checklist with readiness bar; also redrawn by the review loop
pub struct ChecklistPanel<'a>(pub &'a ChecklistSession);

impl fmt::Display for ChecklistPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let percent = session.progress_percent();
        let filled = usize::from(percent) / 5;

        writeln!(f, "📋 Evrak Kontrol Listesi")?;
        writeln!(
            f,
            "   Hazırlık Oranı: %{} [{}{}]",
            percent,
            "#".repeat(filled),
            "-".repeat(20 - filled)
        )?;
        for (index, item) in session.items().iter().enumerate() {
            let mark = if session.is_checked(index) { "x" } else { " " };
            writeln!(f, "   [{}] {:>2}. {}", mark, index + 1, item)?;
        }
        Ok(())
    }
}
