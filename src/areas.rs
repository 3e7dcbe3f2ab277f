//! Sector presets: which formulas usually apply to each automation area.
//!
//! Only used to pre-select pains in scenario templates. The engine never
//! reads this table.

use crate::formula::FormulaId::{self, *};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// In the order the intake form lists them
    pub formulas: &'static [FormulaId],
}

pub const AREAS: [AreaPreset; 6] = [
    AreaPreset {
        key: "area_1_linhas_montagem",
        name: "Linhas de Montagem Automáticas",
        description: "Automação de linhas de montagem industriais",
        formulas: &[
            F01, F02, F03, F04, F05, F06, F07, F08, F09, F10, F11, F12, F14, F15, F16, F17, F18,
        ],
    },
    AreaPreset {
        key: "area_2_maquinas_especiais",
        name: "Soluções em Máquinas Especiais",
        description: "Máquinas customizadas para tarefas únicas",
        formulas: &[F01, F03, F14, F11, F08, F05, F07, F10],
    },
    AreaPreset {
        key: "area_3_controle_qualidade",
        name: "Controle de Qualidade Automatizado",
        description: "Sistemas de visão e inspeção automatizada",
        formulas: &[F06, F14, F07, F05, F18],
    },
    AreaPreset {
        key: "area_4_embalagem",
        name: "Automação de Embalagem (Fim de Linha)",
        description: "Encaixotamento, paletização, stretch wrapping",
        formulas: &[F08, F02, F01, F04, F03, F12, F15, F07, F18],
    },
    AreaPreset {
        key: "area_5_logistica_interna",
        name: "Automação de Logística Interna",
        description: "AGVs/AMRs, substituição de empilhadeiras",
        formulas: &[F13, F09, F10, F08, F12],
    },
    AreaPreset {
        key: "area_6_robotica",
        name: "Soluções Robóticas Customizadas",
        description: "Processos perigosos, insalubres ou alta precisão",
        formulas: &[F12, F15, F01, F03, F04, F05, F07, F08],
    },
];

/// Looks an area up by key, ignoring case.
pub fn find(key: &str) -> Option<&'static AreaPreset> {
    let key = key.trim();
    AREAS.iter().find(|a| a.key.eq_ignore_ascii_case(key))
}
