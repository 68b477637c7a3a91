#[derive(Clone)]
struct Node {
    val: i64,
    len: usize,
    sum: i64,
    neg: bool,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

fn len_of(node: &Option<Box<Node>>) -> usize {
    node.as_ref().map_or(0, |v| v.len)
}

fn sum_of(node: &Option<Box<Node>>) -> i64 {
    node.as_ref().map_or(0, |v| v.sum)
}

impl Node {
    fn new(val: i64) -> Box<Self> {
        Box::new(Self {
            val,
            len: 1,
            sum: val,
            neg: false,
            left: None,
            right: None,
        })
    }

    /// `len`と`sum`を子から計算し直す. 自身の`neg`は`sum`にだけ反映される
    fn update(&mut self) {
        self.len = 1 + len_of(&self.left) + len_of(&self.right);
        let raw = self.val + sum_of(&self.left) + sum_of(&self.right);
        self.sum = if self.neg { self.len as i64 - raw } else { raw };
    }

    /// 遅延している反転を自身の値に適用し, 子に伝搬する
    fn unpack(&mut self) {
        if !self.neg {
            return;
        }
        self.neg = false;
        self.val = 1 - self.val;
        for child in [&mut self.left, &mut self.right].into_iter().flatten() {
            child.neg ^= true;
            child.update();
        }
        self.update();
    }

    fn build(vals: &[i64]) -> Option<Box<Self>> {
        if vals.is_empty() {
            return None;
        }
        let mid = vals.len() / 2;
        let mut node = Self::new(vals[mid]);
        node.left = Self::build(&vals[..mid]);
        node.right = Self::build(&vals[mid + 1..]);
        node.update();
        Some(node)
    }

    fn insert(this: &mut Option<Box<Self>>, index: usize, val: i64) {
        let Some(v) = this else {
            debug_assert_eq!(index, 0);
            *this = Some(Self::new(val));
            return;
        };
        v.unpack();
        let lsize = len_of(&v.left);
        if index <= lsize {
            Self::insert(&mut v.left, index, val);
        } else {
            Self::insert(&mut v.right, index - lsize - 1, val);
        }
        v.update();
    }

    fn remove(this: &mut Option<Box<Self>>, index: usize) -> i64 {
        use std::cmp::Ordering::*;
        let Some(v) = this else {
            unreachable!();
        };
        v.unpack();
        let lsize = len_of(&v.left);
        let ret = match index.cmp(&lsize) {
            Less => Self::remove(&mut v.left, index),
            Greater => Self::remove(&mut v.right, index - lsize - 1),
            Equal => {
                let ret = v.val;
                match (v.left.take(), v.right.take()) {
                    (None, child) | (child, None) => {
                        *this = child;
                        return ret;
                    }
                    (left, right) => {
                        v.left = left;
                        v.right = right;
                        // 右部分木の先頭 (後続) は経路上で伝搬済みなので反転を持たない
                        v.val = Self::remove(&mut v.right, 0);
                    }
                }
                ret
            }
        };
        v.update();
        ret
    }

    /// 半開区間`[l, r)`の和. `0 <= l < r <= self.len`
    fn sum(&mut self, l: usize, r: usize) -> i64 {
        self.unpack();
        if l == 0 && r == self.len {
            return self.sum;
        }
        let lsize = len_of(&self.left);
        let mut ret = 0;
        if let Some(left) = self.left.as_mut().filter(|_| l < lsize) {
            ret += left.sum(l, r.min(lsize));
        }
        if l <= lsize && lsize < r {
            ret += self.val;
        }
        if let Some(right) = self.right.as_mut().filter(|_| lsize + 1 < r) {
            ret += right.sum(l.saturating_sub(lsize + 1), r - lsize - 1);
        }
        ret
    }

    /// `sum`と同じ値を, 伝搬を行わずに求める. `flip`は祖先に溜まっている反転
    fn sum_imu(&self, l: usize, r: usize, flip: bool) -> i64 {
        if l == 0 && r == self.len {
            return if flip {
                self.len as i64 - self.sum
            } else {
                self.sum
            };
        }
        let flip = flip ^ self.neg;
        let lsize = len_of(&self.left);
        let mut ret = 0;
        if let Some(left) = self.left.as_ref().filter(|_| l < lsize) {
            ret += left.sum_imu(l, r.min(lsize), flip);
        }
        if l <= lsize && lsize < r {
            ret += if flip { 1 - self.val } else { self.val };
        }
        if let Some(right) = self.right.as_ref().filter(|_| lsize + 1 < r) {
            ret += right.sum_imu(l.saturating_sub(lsize + 1), r - lsize - 1, flip);
        }
        ret
    }

    /// 半開区間`[l, r)`を反転する. `0 <= l < r <= self.len`
    fn negate(&mut self, l: usize, r: usize) {
        self.unpack();
        if l == 0 && r == self.len {
            self.neg = true;
            self.update();
            return;
        }
        let lsize = len_of(&self.left);
        if let Some(left) = self.left.as_mut().filter(|_| l < lsize) {
            left.negate(l, r.min(lsize));
        }
        if l <= lsize && lsize < r {
            self.val = 1 - self.val;
        }
        if let Some(right) = self.right.as_mut().filter(|_| lsize + 1 < r) {
            right.negate(l.saturating_sub(lsize + 1), r - lsize - 1);
        }
        self.update();
    }

    fn get(&self, mut index: usize) -> i64 {
        use std::cmp::Ordering::*;
        let mut node = self;
        let mut flip = false;
        loop {
            flip ^= node.neg;
            let lsize = len_of(&node.left);
            let next = match index.cmp(&lsize) {
                Less => &node.left,
                Equal => return if flip { 1 - node.val } else { node.val },
                Greater => {
                    index -= lsize + 1;
                    &node.right
                }
            };
            let Some(next) = next.as_deref() else {
                unreachable!();
            };
            node = next;
        }
    }

    fn push_values(&self, flip: bool, out: &mut Vec<i64>) {
        let flip = flip ^ self.neg;
        if let Some(left) = &self.left {
            left.push_values(flip, out);
        }
        out.push(if flip { 1 - self.val } else { self.val });
        if let Some(right) = &self.right {
            right.push_values(flip, out);
        }
    }

    fn dump(this: &Option<Box<Self>>, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        let Some(v) = this else {
            return f.write_char('-');
        };
        write!(f, "(v={},c={},sum={},", v.val, v.len, v.sum)?;
        Self::dump(&v.left, f)?;
        f.write_char(',')?;
        Self::dump(&v.right, f)?;
        f.write_char(')')
    }
}

/// 区間反転・区間和取得ができる, 挿入/削除可能な列
///
/// 各頂点が部分木のサイズと和を持つ二分木で, 位置は左部分木のサイズから決まる.
/// 反転は遅延伝搬され, 頂点を通過するときにはじめて子に適用される.
///
/// 値は0か1であることを想定しているが, 反転は`v -> 1 - v`として任意の整数に対して矛盾なく定義される.
///
/// 平衡はしないので, 各操作の最悪計算量は木の高さ*O*(*n*)になる.
#[derive(Clone, Default)]
pub struct SequenceTree {
    root: Option<Box<Node>>,
}

impl SequenceTree {
    /// 空の列を構築する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn new() -> Self {
        Self { root: None }
    }

    /// 配列`vec`から高さが最小の木を構築する
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn from_vec(vec: Vec<i64>) -> Self {
        Self {
            root: Node::build(&vec),
        }
    }

    /// 列の長さを返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        len_of(&self.root)
    }

    /// 列が空かどうか判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// 値を指定の場所に挿入する
    ///
    /// # Constraints
    ///
    /// - `index <= self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(木の高さ)
    pub fn insert(&mut self, index: usize, item: i64) {
        assert!(index <= self.len());
        Node::insert(&mut self.root, index, item);
    }

    /// 指定した位置の値を削除して, その値を返す
    ///
    /// # Constraints
    ///
    /// - `index < self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(木の高さ)
    pub fn remove(&mut self, index: usize) -> i64 {
        assert!(index < self.len());
        Node::remove(&mut self.root, index)
    }

    /// 指定した位置の値を返す
    ///
    /// # Constraints
    ///
    /// - `index < self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(木の高さ)
    #[must_use]
    pub fn get(&self, index: usize) -> i64 {
        assert!(index < self.len());
        let Some(root) = &self.root else {
            unreachable!();
        };
        root.get(index)
    }

    /// 指定した区間の和を求める
    ///
    /// 通過した頂点の反転は子に伝搬される
    ///
    /// # Constraints
    ///
    /// - `range`は`0..self.len()`に含まれる区間である.
    ///
    /// # Time complexity
    ///
    /// - *O*(木の高さ)
    pub fn sum(&mut self, range: impl std::ops::RangeBounds<usize>) -> i64 {
        let (left, right) = self.bounds(range);
        match &mut self.root {
            Some(root) if left < right => root.sum(left, right),
            _ => 0,
        }
    }

    /// 指定した区間の和を, 木を変更せずに求める
    ///
    /// # Constraints
    ///
    /// - `range`は`0..self.len()`に含まれる区間である.
    ///
    /// # Time complexity
    ///
    /// - *O*(木の高さ)
    #[must_use]
    pub fn sum_imu(&self, range: impl std::ops::RangeBounds<usize>) -> i64 {
        let (left, right) = self.bounds(range);
        match &self.root {
            Some(root) if left < right => root.sum_imu(left, right, false),
            _ => 0,
        }
    }

    /// 指定した区間の値を全て反転する (`v -> 1 - v`)
    ///
    /// # Constraints
    ///
    /// - `range`は`0..self.len()`に含まれる区間である.
    ///
    /// # Time complexity
    ///
    /// - *O*(木の高さ)
    pub fn negate(&mut self, range: impl std::ops::RangeBounds<usize>) {
        let (left, right) = self.bounds(range);
        if let Some(root) = self.root.as_mut().filter(|_| left < right) {
            root.negate(left, right);
        }
    }

    /// 列を`Vec`にして返す
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        let mut ret = Vec::with_capacity(self.len());
        if let Some(root) = &self.root {
            root.push_values(false, &mut ret);
        }
        ret
    }

    /// 木の構造を`(v=値,c=サイズ,sum=和,左,右)`の形で表示するラッパーを返す. 空の部分木は`-`
    ///
    /// 値は伝搬前のものがそのまま表示される. デバッグ用で, 形式は安定していない
    pub fn dump(&self) -> impl std::fmt::Display + '_ {
        struct Dump<'a>(&'a Option<Box<Node>>);
        impl std::fmt::Display for Dump<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Node::dump(self.0, f)
            }
        }
        Dump(&self.root)
    }

    fn bounds(&self, range: impl std::ops::RangeBounds<usize>) -> (usize, usize) {
        use std::ops::Bound::*;
        let len = self.len();
        let left = match range.start_bound() {
            Included(&left) => left,
            Excluded(&left) => left + 1,
            Unbounded => 0,
        };
        let right = match range.end_bound() {
            Included(&right) => right + 1,
            Excluded(&right) => right,
            Unbounded => len,
        };
        assert!(left <= right && right <= len);
        (left, right)
    }
}

impl From<Vec<i64>> for SequenceTree {
    fn from(value: Vec<i64>) -> Self {
        Self::from_vec(value)
    }
}

impl FromIterator<i64> for SequenceTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl std::fmt::Debug for SequenceTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}
