//! 强连通分量
//!
//! 两个彼此独立的实现：Tarjan 单趟 DFS 与 Kosaraju 双趟 DFS。
//! 二者在任何输入上给出相同的集合划分，分量内外的顺序可以不同。

use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::types::VertexId;

/// 未访问标记（发现序数组的哨兵值）
const UNVISITED: usize = usize::MAX;

impl<T> Graph<T> {
    /// Tarjan 强连通分量，O(V+E)
    ///
    /// 单趟显式栈 DFS：给每个顶点分配发现序和 low-link 值
    /// （经由未访问子孙或仍在栈上的顶点可达的最小发现序）。
    /// low-link 等于自身发现序的顶点是分量根，此时把分量栈
    /// 弹到根为止收割一个分量。
    pub fn scc(&self) -> Vec<Vec<VertexId>> {
        global_metrics().record_algorithm_run();

        let n = self.index_bound();
        let mut index = vec![UNVISITED; n];
        let mut low_link = vec![UNVISITED; n];
        let mut on_stack = vec![false; n];
        let mut counter = 0;
        // 限定当前连通性判定范围的分量栈
        let mut stack: Vec<VertexId> = Vec::new();
        // DFS 帧: (顶点, 下一个待检查的出边序号)
        let mut frames: Vec<(VertexId, usize)> = Vec::new();
        let mut sccs = Vec::new();

        for root in self.vertex_ids() {
            if index[root] != UNVISITED {
                continue;
            }
            index[root] = counter;
            low_link[root] = counter;
            counter += 1;
            stack.push(root);
            on_stack[root] = true;
            frames.push((root, 0));

            while let Some(frame) = frames.last_mut() {
                let v = frame.0;
                let next = self
                    .vertex(v)
                    .and_then(|vertex| vertex.edges().get_index(frame.1))
                    .map(|(&to, _)| to);

                match next {
                    Some(to) => {
                        frame.1 += 1;
                        if index[to] == UNVISITED {
                            index[to] = counter;
                            low_link[to] = counter;
                            counter += 1;
                            stack.push(to);
                            on_stack[to] = true;
                            frames.push((to, 0));
                        } else if on_stack[to] {
                            low_link[v] = low_link[v].min(low_link[to]);
                        }
                    }
                    None => {
                        frames.pop();
                        // 把 low-link 回传给父帧
                        if let Some(&(parent, _)) = frames.last() {
                            low_link[parent] = low_link[parent].min(low_link[v]);
                        }
                        if low_link[v] == index[v] {
                            // v 是分量根，弹栈直到根为止
                            let mut component = Vec::new();
                            while let Some(w) = stack.pop() {
                                on_stack[w] = false;
                                component.push(w);
                                if w == v {
                                    break;
                                }
                            }
                            sccs.push(component);
                        }
                    }
                }
            }
        }

        sccs
    }

    /// Kosaraju 强连通分量
    ///
    /// 第一趟按完成时间在原图上填栈；第二趟在反向图上按出栈顺序
    /// 逐个启动 DFS，每趟 DFS 恰好收割一个分量。
    pub fn kosaraju_scc(&self) -> Vec<Vec<VertexId>> {
        global_metrics().record_algorithm_run();

        let n = self.index_bound();
        // 第一趟：完成时间升序
        let mut finish_stack = self.dfs_finish_order();

        // 反向邻接表（只反转边向，ID 不变）
        let mut reversed: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        for vertex in self.vertices() {
            for to in vertex.neighbors() {
                reversed[to].push(vertex.id());
            }
        }

        let mut visited = vec![false; n];
        let mut sccs = Vec::new();

        // 第二趟：按完成时间降序处理
        while let Some(root) = finish_stack.pop() {
            if visited[root] {
                continue;
            }
            let mut component = Vec::new();
            let mut work = vec![root];
            visited[root] = true;
            while let Some(v) = work.pop() {
                component.push(v);
                for &to in &reversed[v] {
                    if !visited[to] {
                        visited[to] = true;
                        work.push(to);
                    }
                }
            }
            sccs.push(component);
        }

        sccs
    }
}
