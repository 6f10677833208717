use multiphase_io::ConfigStore;
use multiphase_mesh::Mesh;
use multiphase_types::DimensionedScalar;
use multiphase_types::quantity::{Density, Dimensionless, DynamicViscosity};

use crate::error::TransportError;
use crate::phase::{DispersedPhase, PhaseProperties, PhaseTag};

/// 連続相 1 つと分散相 N 個の物性を保持する。
///
/// 辞書は次の構成をとる:
///
/// ```text
/// dispersedPhases        分散相の数 N
/// continuousPhase        { rho, mu }
/// dispersedPhase         { rho1..rhoN, mu1..muN, sigma1..sigmaN }
/// transportCoefficients  { Cl, Cvm }
/// ```
///
/// 構築は一度きりで、途中のいずれかの読み込みに失敗すれば何も返さない。
/// 構築後に値を変更する手段はなく、複数の読み手から共有して参照できる。
#[derive(Debug)]
pub struct MultiphaseTransport<'a> {
    mesh: &'a Mesh,
    cl: DimensionedScalar,
    cvm: DimensionedScalar,
    continuous: PhaseProperties,
    dispersed: Box<[DispersedPhase]>,
}

impl<'a> MultiphaseTransport<'a> {
    /// 辞書とメッシュから物性を構築する。
    ///
    /// 分散相は番号 1, 2, … の順に読み込み、最初に失敗したキーで打ち切る。
    ///
    /// # Errors
    ///
    /// サブ辞書・キーの欠落、型や次元の不一致は [`TransportError::Config`]。
    pub fn new<C: ConfigStore>(config: &C, mesh: &'a Mesh) -> Result<Self, TransportError> {
        let continuous_dict = config.sub_dict("continuousPhase")?;
        let dispersed_dict = config.sub_dict("dispersedPhase")?;
        let coeffs_dict = config.sub_dict("transportCoefficients")?;

        let n_dispersed = config.lookup_label("dispersedPhases")?;

        let cl = coeffs_dict.lookup_scalar::<Dimensionless>("Cl")?;
        let cvm = coeffs_dict.lookup_scalar::<Dimensionless>("Cvm")?;

        let rho = continuous_dict.lookup_scalar::<Density>("rho")?;
        let mu = continuous_dict.lookup_scalar::<DynamicViscosity>("mu")?;

        let dispersed = (1..=n_dispersed)
            .map(|number| DispersedPhase::read(dispersed_dict, mesh, number))
            .collect::<Result<Box<[_]>, _>>()?;

        let continuous = PhaseProperties::new(mesh, PhaseTag::Continuous, rho, mu)?;

        log::info!(
            "multiphase transport: {} dispersed phase(s) over {} cells, {}, {}",
            dispersed.len(),
            mesh.n_cells(),
            cl,
            cvm
        );

        Ok(Self {
            mesh,
            cl,
            cvm,
            continuous,
            dispersed,
        })
    }

    pub fn mesh(&self) -> &'a Mesh {
        self.mesh
    }

    /// 連続相の物性。
    pub fn continuous(&self) -> &PhaseProperties {
        &self.continuous
    }

    /// 0 始まりの `index` 番目の分散相。
    ///
    /// # Errors
    ///
    /// `index >= n_dispersed()` の場合 [`TransportError::PhaseIndexOutOfRange`]。
    pub fn dispersed(&self, index: usize) -> Result<&DispersedPhase, TransportError> {
        self.dispersed
            .get(index)
            .ok_or(TransportError::PhaseIndexOutOfRange {
                index,
                count: self.dispersed.len(),
            })
    }

    pub fn dispersed_phases(&self) -> &[DispersedPhase] {
        &self.dispersed
    }

    pub fn n_dispersed(&self) -> usize {
        self.dispersed.len()
    }

    /// 揚力係数
    pub fn cl(&self) -> &DimensionedScalar {
        &self.cl
    }

    /// 仮想質量係数
    pub fn cvm(&self) -> &DimensionedScalar {
        &self.cvm
    }
}
