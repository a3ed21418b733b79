/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::border_mode::ExtensionMode;
use crate::dwt::DwtHandler;
use crate::err::SubbandError;
use crate::registry::AsWavelet;
use crate::util::dwt_max_level;
use crate::{Dwt, DwtExecutor, WaveletSample};
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Index of a node in a [`WaveletPacket`] arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One subband of a wavelet packet tree.
///
/// The parent is never stored; it is the node whose path is this path without its
/// last symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketNode<T> {
    path: String,
    level: usize,
    data: Option<Vec<T>>,
    data_len: Option<usize>,
    children: [Option<NodeId>; 2],
}

impl<T> PacketNode<T> {
    /// Route from the root as a sequence of `a` and `d`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Depth of the node, the root is at level 0.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Coefficients held by the node, `None` for placeholder nodes.
    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    /// Approximation and detail children.
    pub fn children(&self) -> [Option<NodeId>; 2] {
        self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(|x| x.is_none())
    }
}

/// Ordering of the nodes returned by [`WaveletPacket::get_level`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PacketOrder {
    /// Lexicographic path order, `a` before `d`.
    #[default]
    Natural,
    /// Increasing frequency band. Paths are read as a Gray code.
    Frequency,
}

/// Wavelet packet decomposition tree.
///
/// Both branches of every node can be decomposed further, which gives a full binary
/// tree of subbands. Nodes live in an arena and are created on demand; a node can be
/// decomposed while its level is below `maxlevel` and it holds at least
/// `support_length` coefficients.
///
/// ```
/// use subband::{ExtensionMode, PacketOrder, WaveletPacket};
///
/// let signal = (0..64).map(|x| (x as f64 * 0.2).sin()).collect::<Vec<_>>();
/// let mut tree = WaveletPacket::new(&signal, "db2", ExtensionMode::Symmetric, None).unwrap();
/// let paths = tree
///     .get_level(2, PacketOrder::Frequency, true)
///     .unwrap()
///     .iter()
///     .map(|x| x.path().to_string())
///     .collect::<Vec<_>>();
/// assert_eq!(paths, ["aa", "ad", "dd", "da"]);
/// let restored = tree.reconstruct(false).unwrap();
/// assert!(restored.iter().zip(signal.iter()).all(|(a, b)| (a - b).abs() < 1e-9));
/// ```
pub struct WaveletPacket<T> {
    nodes: Vec<Option<PacketNode<T>>>,
    paths: HashMap<String, NodeId>,
    handler: DwtHandler<T>,
    wavelet_name: String,
    support_length: usize,
    mode: ExtensionMode,
    maxlevel: usize,
}

const ROOT: NodeId = NodeId(0);

fn child_symbol(slot: usize) -> char {
    if slot == 0 { 'a' } else { 'd' }
}

/// Sort key placing paths in frequency order.
///
/// Symbol `i` of the key is the parity of the `d` count in the first `i + 1`
/// symbols, which converts a Gray-coded path into its binary rank.
fn frequency_key(path: &str) -> Vec<bool> {
    let mut parity = false;
    path.chars()
        .map(|c| {
            parity ^= c == 'd';
            parity
        })
        .collect()
}

impl<T: WaveletSample> WaveletPacket<T>
where
    f64: AsPrimitive<T>,
{
    /// Builds the root node holding `data`.
    ///
    /// `maxlevel` defaults to [`dwt_max_level`] of the signal.
    pub fn new<W: AsWavelet + ?Sized>(
        data: &[T],
        wavelet: &W,
        mode: ExtensionMode,
        maxlevel: Option<usize>,
    ) -> Result<Self, SubbandError> {
        if data.is_empty() {
            return Err(SubbandError::InputTooShort { len: 0, min: 1 });
        }
        let wavelet = wavelet.as_wavelet()?;
        let support_length = wavelet.support_length();
        let maxlevel = maxlevel.unwrap_or_else(|| dwt_max_level(data.len(), support_length));
        let root = PacketNode {
            path: String::new(),
            level: 0,
            data: Some(data.to_vec()),
            data_len: Some(data.len()),
            children: [None, None],
        };
        let mut paths = HashMap::new();
        paths.insert(String::new(), ROOT);
        Ok(Self {
            nodes: vec![Some(root)],
            paths,
            handler: DwtHandler::new(wavelet, mode),
            wavelet_name: wavelet.name().to_string(),
            support_length,
            mode,
            maxlevel,
        })
    }

    pub fn maxlevel(&self) -> usize {
        self.maxlevel
    }

    pub fn mode(&self) -> ExtensionMode {
        self.mode
    }

    pub fn wavelet_name(&self) -> &str {
        &self.wavelet_name
    }

    /// Number of nodes currently in the tree.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Looks a node up without decomposing anything.
    pub fn get(&self, path: &str) -> Option<&PacketNode<T>> {
        self.paths.get(path).and_then(|&id| self.by_id(id))
    }

    pub fn by_id(&self, id: NodeId) -> Option<&PacketNode<T>> {
        self.nodes.get(id.0)?.as_ref()
    }

    fn require(&self, id: NodeId) -> Result<&PacketNode<T>, SubbandError> {
        self.by_id(id)
            .ok_or_else(|| SubbandError::InvalidPath(format!("node {} was removed", id.0)))
    }

    fn require_mut(&mut self, id: NodeId) -> Result<&mut PacketNode<T>, SubbandError> {
        self.nodes
            .get_mut(id.0)
            .and_then(|x| x.as_mut())
            .ok_or_else(|| SubbandError::InvalidPath(format!("node {} was removed", id.0)))
    }

    fn validate_path(&self, path: &str) -> Result<(), SubbandError> {
        if let Some(c) = path.chars().find(|&c| c != 'a' && c != 'd') {
            return Err(SubbandError::InvalidPath(format!(
                "'{path}' contains '{c}', only 'a' and 'd' are allowed"
            )));
        }
        if path.len() > self.maxlevel {
            return Err(SubbandError::InvalidPath(format!(
                "'{path}' is deeper than the maximum level {}",
                self.maxlevel
            )));
        }
        Ok(())
    }

    fn can_decompose(&self, node: &PacketNode<T>) -> bool {
        node.level < self.maxlevel
            && node
                .data
                .as_ref()
                .is_some_and(|x| !x.is_empty() && x.len() >= self.support_length)
    }

    fn create_child(
        &mut self,
        parent: NodeId,
        slot: usize,
        data: Option<Vec<T>>,
    ) -> Result<NodeId, SubbandError> {
        let id = NodeId(self.nodes.len());
        let parent_node = self.require_mut(parent)?;
        parent_node.children[slot] = Some(id);
        let mut path = parent_node.path.clone();
        path.push(child_symbol(slot));
        let level = parent_node.level + 1;
        self.paths.insert(path.clone(), id);
        self.nodes.push(Some(PacketNode {
            path,
            level,
            data_len: data.as_ref().map(|x| x.len()),
            data,
            children: [None, None],
        }));
        Ok(id)
    }

    /// Creates whichever children of `parent` are missing.
    fn attach(&mut self, parent: NodeId, dwt: Dwt<T>) -> Result<(), SubbandError> {
        let children = self.require(parent)?.children;
        for (slot, data) in [dwt.approximations, dwt.details].into_iter().enumerate() {
            if children[slot].is_none() {
                self.create_child(parent, slot, Some(data))?;
            }
        }
        Ok(())
    }

    fn decompose_node(&mut self, id: NodeId) -> Result<(), SubbandError> {
        let node = self.require(id)?;
        if !self.can_decompose(node) {
            return Err(SubbandError::InvalidPath(format!(
                "node '{}' cannot be decomposed",
                node.path
            )));
        }
        let dwt = self.handler.dwt(node.data.as_deref().unwrap_or_default())?;
        self.attach(id, dwt)
    }

    /// Decomposes every node at `depth` that still misses a child.
    ///
    /// Sibling subtrees are independent, so their transforms run in parallel and the
    /// children are attached afterwards.
    fn expand_depth(&mut self, depth: usize) -> Result<(), SubbandError> {
        let jobs = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| {
                let node = node.as_ref()?;
                let pending = node.level == depth
                    && node.children.iter().any(|x| x.is_none())
                    && self.can_decompose(node);
                if pending {
                    Some((NodeId(i), node.data.as_deref()?))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        if jobs.is_empty() {
            return Ok(());
        }

        #[cfg(feature = "rayon")]
        let results = jobs
            .par_iter()
            .map(|&(id, data)| self.handler.dwt(data).map(|x| (id, x)))
            .collect::<Result<Vec<_>, SubbandError>>()?;
        #[cfg(not(feature = "rayon"))]
        let results = jobs
            .iter()
            .map(|&(id, data)| self.handler.dwt(data).map(|x| (id, x)))
            .collect::<Result<Vec<_>, SubbandError>>()?;

        debug!(depth, nodes = results.len(), "expanded packet level");
        for (id, dwt) in results.into_iter() {
            self.attach(id, dwt)?;
        }
        Ok(())
    }

    /// Returns the node at `path`, decomposing its ancestors on the way.
    ///
    /// # Errors
    /// [`SubbandError::InvalidPath`] for a symbol other than `a`/`d`, a path deeper
    /// than `maxlevel`, or an ancestor that cannot be decomposed.
    pub fn node(&mut self, path: &str) -> Result<&PacketNode<T>, SubbandError> {
        self.validate_path(path)?;
        let mut current = ROOT;
        for c in path.chars() {
            let slot = if c == 'a' { 0 } else { 1 };
            let next = self.require(current)?.children[slot];
            current = match next {
                Some(child) => child,
                None => {
                    self.decompose_node(current)?;
                    self.require(current)?.children[slot].ok_or_else(|| {
                        SubbandError::InvalidPath(format!("'{path}' could not be created"))
                    })?
                }
            };
        }
        self.require(current)
    }

    fn sorted(&self, ids: Vec<NodeId>, order: PacketOrder) -> Vec<&PacketNode<T>> {
        let mut nodes = ids
            .into_iter()
            .filter_map(|id| self.by_id(id))
            .collect::<Vec<_>>();
        match order {
            PacketOrder::Natural => nodes.sort_by(|a, b| a.path.cmp(&b.path)),
            PacketOrder::Frequency => {
                nodes.sort_by_cached_key(|x| frequency_key(&x.path));
            }
        }
        nodes
    }

    /// All nodes at `level`, decomposing the tree down to it when `decompose` is set.
    #[tracing::instrument(skip(self), fields(maxlevel = self.maxlevel))]
    pub fn get_level(
        &mut self,
        level: usize,
        order: PacketOrder,
        decompose: bool,
    ) -> Result<Vec<&PacketNode<T>>, SubbandError> {
        if level > self.maxlevel {
            return Err(SubbandError::LevelTooHigh {
                requested: level,
                max: self.maxlevel,
                len: self.require(ROOT)?.data_len.unwrap_or(0),
            });
        }
        if decompose {
            for depth in 0..level {
                self.expand_depth(depth)?;
            }
        }
        let ids = self
            .paths
            .iter()
            .filter(|(path, _)| path.len() == level)
            .map(|(_, &id)| id)
            .collect::<Vec<_>>();
        Ok(self.sorted(ids, order))
    }

    /// Nodes without children in natural order, after decomposing the whole tree
    /// when `decompose` is set.
    #[tracing::instrument(skip(self), fields(maxlevel = self.maxlevel))]
    pub fn get_leaf_nodes(&mut self, decompose: bool) -> Result<Vec<&PacketNode<T>>, SubbandError> {
        if decompose {
            for depth in 0..self.maxlevel {
                self.expand_depth(depth)?;
            }
        }
        let ids = self
            .paths
            .values()
            .copied()
            .filter(|&id| self.by_id(id).is_some_and(|x| x.is_leaf()))
            .collect::<Vec<_>>();
        Ok(self.sorted(ids, PacketOrder::Natural))
    }

    /// Replaces the coefficients at `path`.
    ///
    /// Missing nodes along the path are created as placeholders without data.
    pub fn set_data(&mut self, path: &str, values: Vec<T>) -> Result<(), SubbandError> {
        self.validate_path(path)?;
        let mut current = ROOT;
        for c in path.chars() {
            let slot = if c == 'a' { 0 } else { 1 };
            let next = self.require(current)?.children[slot];
            current = match next {
                Some(child) => child,
                None => self.create_child(current, slot, None)?,
            };
        }
        let node = self.require_mut(current)?;
        if node.data_len.is_none() {
            node.data_len = Some(values.len());
        }
        node.data = Some(values);
        Ok(())
    }

    /// Deletes the node at `path` with its whole subtree.
    pub fn remove(&mut self, path: &str) -> Result<(), SubbandError> {
        if path.is_empty() {
            return Err(SubbandError::InvalidPath(
                "the root node cannot be removed".to_string(),
            ));
        }
        let id = *self
            .paths
            .get(path)
            .ok_or_else(|| SubbandError::InvalidPath(format!("node '{path}' does not exist")))?;
        let parent_path = &path[..path.len() - 1];
        if let Some(&parent) = self.paths.get(parent_path) {
            let slot = if path.ends_with('a') { 0 } else { 1 };
            self.require_mut(parent)?.children[slot] = None;
        }

        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(id.0).and_then(|x| x.take()) {
                self.paths.remove(&node.path);
                stack.extend(node.children.iter().flatten());
            }
        }
        Ok(())
    }

    fn crop(&self, mut rec: Vec<T>, data_len: Option<usize>) -> Vec<T> {
        if let Some(len) = data_len {
            rec.truncate(len);
        }
        rec
    }

    fn reconstruct_subtree(
        &mut self,
        id: NodeId,
        update: bool,
    ) -> Result<Option<Vec<T>>, SubbandError> {
        let node = self.require(id)?;
        if node.is_leaf() {
            return Ok(node.data.clone());
        }
        let [low, high] = node.children;
        let data_len = node.data_len;
        let low = match low {
            Some(child) => self.reconstruct_subtree(child, update)?,
            None => None,
        };
        let high = match high {
            Some(child) => self.reconstruct_subtree(child, update)?,
            None => None,
        };
        if low.is_none() && high.is_none() {
            return Ok(None);
        }
        let rec = self.handler.idwt(low.as_deref(), high.as_deref())?;
        let rec = self.crop(rec, data_len);
        if update {
            self.require_mut(id)?.data = Some(rec.clone());
        }
        Ok(Some(rec))
    }

    /// Rebuilds the signal from the current leaves.
    ///
    /// With `update` every inner node on the way, the root included, takes the
    /// reconstructed coefficients.
    #[tracing::instrument(skip(self), fields(nodes = self.paths.len()))]
    pub fn reconstruct(&mut self, update: bool) -> Result<Vec<T>, SubbandError> {
        self.reconstruct_subtree(ROOT, update)?
            .ok_or(SubbandError::MissingCoefficients)
    }

    fn reconstruct_selected(
        &self,
        id: NodeId,
        selected: &HashSet<&str>,
    ) -> Result<Option<Vec<T>>, SubbandError> {
        let node = self.require(id)?;
        if selected.contains(node.path.as_str()) {
            return Ok(node.data.clone());
        }
        if !selected.iter().any(|x| x.starts_with(node.path.as_str())) {
            return Ok(None);
        }
        let mut bands = [None, None];
        for (slot, band) in bands.iter_mut().enumerate() {
            if let Some(child) = node.children[slot] {
                *band = self.reconstruct_selected(child, selected)?;
            }
        }
        let [low, high] = bands;
        if low.is_none() && high.is_none() {
            return Ok(None);
        }
        let rec = self.handler.idwt(low.as_deref(), high.as_deref())?;
        Ok(Some(self.crop(rec, node.data_len)))
    }

    /// Reconstructs the signal from a frontier of existing nodes.
    ///
    /// The nodes may sit at different depths but no path may be a prefix of another.
    /// Parts of the tree not covered by `paths` contribute zeros.
    #[tracing::instrument(skip(self), fields(nodes = paths.len()))]
    pub fn reconstruct_from(&self, paths: &[&str]) -> Result<Vec<T>, SubbandError> {
        for path in paths.iter() {
            let node = self
                .get(path)
                .ok_or_else(|| SubbandError::InvalidPath(format!("node '{path}' does not exist")))?;
            if node.data.is_none() {
                return Err(SubbandError::InvalidPath(format!(
                    "node '{path}' holds no coefficients"
                )));
            }
        }
        let mut sorted = paths.to_vec();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[1].starts_with(pair[0]) {
                return Err(SubbandError::InvalidPath(format!(
                    "'{}' overlaps '{}'",
                    pair[0], pair[1]
                )));
            }
        }
        let selected = paths.iter().copied().collect::<HashSet<_>>();
        self.reconstruct_selected(ROOT, &selected)?
            .ok_or(SubbandError::MissingCoefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dwt::idwt;

    fn make_signal(len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| ((i as f64) * 0.23).sin() * 4. + ((i * i) % 13) as f64 * 0.1)
            .collect()
    }

    fn assert_signal(derived: &[f64], reference: &[f64], tolerance: f64) {
        assert_eq!(derived.len(), reference.len());
        derived.iter().zip(reference.iter()).for_each(|(a, b)| {
            assert!(
                (a - b).abs() < tolerance,
                "difference expected to be < {tolerance}, but values were ref {b}, derived {a}"
            );
        });
    }

    #[test]
    fn test_haar_nodes() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let signal = [1.0f64, 2., 3., 4., 5., 6., 7., 8.];
        let mut tree =
            WaveletPacket::new(&signal, "haar", ExtensionMode::Periodization, None).unwrap();
        assert_eq!(tree.maxlevel(), 3);
        let a = tree.node("a").unwrap().data().unwrap().to_vec();
        assert_signal(&a, &[3. * h, 7. * h, 11. * h, 15. * h], 1e-12);
        let aa = tree.node("aa").unwrap();
        assert_eq!(aa.level(), 2);
        assert_signal(aa.data().unwrap(), &[5., 13.], 1e-12);
        assert!(tree.get("ad").is_some());
        assert!(tree.get("da").is_none());
    }

    #[test]
    fn test_full_depth_reconstruction() {
        let signal = make_signal(37);
        for mode in [ExtensionMode::Symmetric, ExtensionMode::Periodization] {
            let mut tree = WaveletPacket::new(&signal, "db2", mode, None).unwrap();
            for depth in 0..=tree.maxlevel() {
                let paths = tree
                    .get_level(depth, PacketOrder::Natural, true)
                    .unwrap()
                    .iter()
                    .map(|x| x.path().to_string())
                    .collect::<Vec<_>>();
                assert_eq!(paths.len(), 1 << depth);
                let refs = paths.iter().map(|x| x.as_str()).collect::<Vec<_>>();
                let restored = tree.reconstruct_from(&refs).unwrap();
                assert_signal(&restored, &signal, 1e-9);
            }
            let restored = tree.reconstruct(false).unwrap();
            assert_signal(&restored, &signal, 1e-9);
        }
    }

    #[test]
    fn test_frequency_order() {
        let signal = make_signal(64);
        let mut tree = WaveletPacket::new(&signal, "haar", ExtensionMode::Symmetric, None).unwrap();
        let natural = tree
            .get_level(3, PacketOrder::Natural, true)
            .unwrap()
            .iter()
            .map(|x| x.path().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            natural,
            ["aaa", "aad", "ada", "add", "daa", "dad", "dda", "ddd"]
        );
        let frequency = tree
            .get_level(3, PacketOrder::Frequency, false)
            .unwrap()
            .iter()
            .map(|x| x.path().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            frequency,
            ["aaa", "aad", "add", "ada", "dda", "ddd", "dad", "daa"]
        );
    }

    #[test]
    fn test_best_basis() {
        let signal = make_signal(96);
        let mut tree =
            WaveletPacket::new(&signal, "sym3", ExtensionMode::Symmetric, Some(3)).unwrap();
        tree.get_level(3, PacketOrder::Natural, true).unwrap();
        let restored = tree.reconstruct_from(&["aaa", "aad", "ad", "d"]).unwrap();
        assert_signal(&restored, &signal, 1e-9);

        assert!(matches!(
            tree.reconstruct_from(&["a", "ad"]),
            Err(SubbandError::InvalidPath(_))
        ));
        assert!(matches!(
            tree.reconstruct_from(&["a", "a"]),
            Err(SubbandError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_invalid_paths() {
        let signal = make_signal(16);
        let mut tree =
            WaveletPacket::new(&signal, "haar", ExtensionMode::Symmetric, Some(2)).unwrap();
        assert!(matches!(tree.node("ax"), Err(SubbandError::InvalidPath(_))));
        assert!(matches!(tree.node("aaa"), Err(SubbandError::InvalidPath(_))));
        assert!(matches!(
            tree.reconstruct_from(&["dd"]),
            Err(SubbandError::InvalidPath(_))
        ));
        assert!(matches!(tree.remove(""), Err(SubbandError::InvalidPath(_))));
        assert!(matches!(
            tree.get_level(3, PacketOrder::Natural, true),
            Err(SubbandError::LevelTooHigh { .. })
        ));
    }

    #[test]
    fn test_remove_and_set_data() {
        let signal = make_signal(40);
        let mode = ExtensionMode::Symmetric;
        let mut tree = WaveletPacket::new(&signal, "db3", mode, None).unwrap();
        let approx = tree.node("a").unwrap().data().unwrap().to_vec();
        let approx_only = idwt(Some(approx.as_slice()), None, "db3", mode).unwrap();

        tree.node("dd").unwrap();
        tree.remove("d").unwrap();
        assert!(tree.get("dd").is_none());
        assert!(tree.get("d").is_none());
        let restored = tree.reconstruct(false).unwrap();
        assert_signal(&restored, &approx_only[..signal.len()], 1e-12);

        let zeros = vec![0f64; approx.len()];
        tree.set_data("d", zeros).unwrap();
        let restored = tree.reconstruct(true).unwrap();
        assert_signal(&restored, &approx_only[..signal.len()], 1e-12);
        assert_signal(tree.get("").unwrap().data().unwrap(), &restored, 1e-15);
    }

    #[test]
    fn test_leaf_nodes() {
        let signal = make_signal(32);
        let mut tree =
            WaveletPacket::new(&signal, "haar", ExtensionMode::Periodization, Some(3)).unwrap();
        assert_eq!(tree.get_leaf_nodes(false).unwrap().len(), 1);
        let leaves = tree.get_leaf_nodes(true).unwrap();
        assert_eq!(leaves.len(), 8);
        assert!(leaves.iter().all(|x| x.level() == 3 && x.data().map(|d| d.len()) == Some(4)));
        assert_eq!(tree.len(), 15);
    }

    #[test]
    fn test_set_data_creates_placeholders() {
        let signal = make_signal(32);
        let mode = ExtensionMode::Periodization;
        let mut tree = WaveletPacket::new(&signal, "haar", mode, None).unwrap();
        let reference = {
            let mut full = WaveletPacket::new(&signal, "haar", mode, None).unwrap();
            full.node("da").unwrap().data().unwrap().to_vec()
        };
        tree.set_data("da", reference.clone()).unwrap();
        assert!(tree.get("d").unwrap().data().is_none());
        let restored = tree.reconstruct(false).unwrap();
        let expected = {
            let mut full = WaveletPacket::new(&signal, "haar", mode, None).unwrap();
            full.node("da").unwrap();
            full.reconstruct_from(&["da"]).unwrap()
        };
        assert_signal(&restored, &expected, 1e-12);
    }
}
