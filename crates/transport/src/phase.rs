use multiphase_fields::{FieldError, VolScalarField};
use multiphase_io::ConfigStore;
use multiphase_mesh::Mesh;
use multiphase_types::DimensionedScalar;
use multiphase_types::Quantity;
use multiphase_types::quantity::{Density, DynamicViscosity, KinematicViscosity, SurfaceTension};

use crate::error::TransportError;

/// フィールド名・派生スカラー名の付け方を決める相の識別子。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PhaseTag {
    Continuous,
    /// 1 始まりの分散相番号
    Dispersed(usize),
}

impl PhaseTag {
    fn rho_field(self) -> String {
        match self {
            PhaseTag::Continuous => "rhoc".to_string(),
            PhaseTag::Dispersed(i) => format!("rhodField{i}"),
        }
    }

    fn mu_field(self) -> String {
        match self {
            PhaseTag::Continuous => "muc".to_string(),
            PhaseTag::Dispersed(i) => format!("mudField{i}"),
        }
    }

    fn nu_field(self) -> String {
        match self {
            PhaseTag::Continuous => "nuc".to_string(),
            PhaseTag::Dispersed(i) => format!("nudField{i}"),
        }
    }

    fn nu(self) -> String {
        match self {
            PhaseTag::Continuous => "nuc".to_string(),
            PhaseTag::Dispersed(i) => format!("nu{i}"),
        }
    }
}

/// ニュートン流体 1 相分の密度・粘性とそのセルフィールド。
///
/// 動粘性係数 `nu` とそのフィールドは構築時に `mu / rho` から一度だけ計算し、
/// 以後は変更されない。
#[derive(Debug, PartialEq)]
pub struct PhaseProperties {
    rho: DimensionedScalar,
    mu: DimensionedScalar,
    nu: DimensionedScalar,
    rho_field: VolScalarField,
    mu_field: VolScalarField,
    nu_field: VolScalarField,
}

impl PhaseProperties {
    pub(crate) fn new(
        mesh: &Mesh,
        tag: PhaseTag,
        rho: DimensionedScalar,
        mu: DimensionedScalar,
    ) -> Result<Self, FieldError> {
        let nu = (&mu / &rho).renamed(tag.nu());
        debug_assert_eq!(nu.dimensions(), KinematicViscosity::dimension());
        let rho_field = VolScalarField::from_dimensioned(mesh, tag.rho_field(), &rho);
        let mu_field = VolScalarField::from_dimensioned(mesh, tag.mu_field(), &mu);
        let nu_field = mu_field.try_div(&rho_field, tag.nu_field())?;

        Ok(Self {
            rho,
            mu,
            nu,
            rho_field,
            mu_field,
            nu_field,
        })
    }

    /// 密度
    pub fn rho(&self) -> &DimensionedScalar {
        &self.rho
    }

    pub fn rho_field(&self) -> &VolScalarField {
        &self.rho_field
    }

    /// 粘性係数
    pub fn mu(&self) -> &DimensionedScalar {
        &self.mu
    }

    pub fn mu_field(&self) -> &VolScalarField {
        &self.mu_field
    }

    /// 動粘性係数 `mu / rho`
    pub fn nu(&self) -> &DimensionedScalar {
        &self.nu
    }

    pub fn nu_field(&self) -> &VolScalarField {
        &self.nu_field
    }
}

/// 分散相 1 つ分の物性。
#[derive(Debug, PartialEq)]
pub struct DispersedPhase {
    number: usize,
    sigma: DimensionedScalar,
    properties: PhaseProperties,
}

impl DispersedPhase {
    /// `dispersedPhase` 辞書から `rho<n>`, `mu<n>`, `sigma<n>` を読み込む。
    pub(crate) fn read<C: ConfigStore>(
        dict: &C,
        mesh: &Mesh,
        number: usize,
    ) -> Result<Self, TransportError> {
        let rho = dict.lookup_scalar::<Density>(&format!("rho{number}"))?;
        let mu = dict.lookup_scalar::<DynamicViscosity>(&format!("mu{number}"))?;
        let sigma = dict.lookup_scalar::<SurfaceTension>(&format!("sigma{number}"))?;
        let properties = PhaseProperties::new(mesh, PhaseTag::Dispersed(number), rho, mu)?;

        log::debug!(
            "dispersed phase {number}: {}, {}, {}",
            properties.rho(),
            properties.mu(),
            sigma
        );

        Ok(Self {
            number,
            sigma,
            properties,
        })
    }

    /// 1 始まりの相番号。辞書キーとフィールド名の添字に一致する。
    pub fn number(&self) -> usize {
        self.number
    }

    /// 連続相との界面張力
    pub fn sigma(&self) -> &DimensionedScalar {
        &self.sigma
    }

    pub fn properties(&self) -> &PhaseProperties {
        &self.properties
    }

    pub fn rho(&self) -> &DimensionedScalar {
        self.properties.rho()
    }

    pub fn rho_field(&self) -> &VolScalarField {
        self.properties.rho_field()
    }

    pub fn mu(&self) -> &DimensionedScalar {
        self.properties.mu()
    }

    pub fn mu_field(&self) -> &VolScalarField {
        self.properties.mu_field()
    }

    pub fn nu(&self) -> &DimensionedScalar {
        self.properties.nu()
    }

    pub fn nu_field(&self) -> &VolScalarField {
        self.properties.nu_field()
    }
}
